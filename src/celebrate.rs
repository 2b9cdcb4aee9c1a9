use crate::core::{plan_celebration, FireworksPlan};
use crate::dom;
use crate::overlay;
use crate::render::{self, FIREWORK_VARS, HEART_VARS};
use web_sys as web;

/// Swaps the decision card for the success card and throws the confetti.
#[derive(Clone)]
pub struct CelebrationSequencer {
    pub document: web::Document,
    pub decision_panel: web::Element,
    pub celebration_panel: web::Element,
    pub avoided: web::HtmlElement,
}

impl CelebrationSequencer {
    pub fn trigger(&self) {
        overlay::hide(&self.decision_panel);
        overlay::remove_from_layout(&self.avoided);
        overlay::show(&self.celebration_panel);

        let plan = plan_celebration(&mut rand::thread_rng());

        match dom::query_selector(&self.celebration_panel, ".dancing-polar-bears") {
            Some(bears) => {
                dom::clear_children(&bears);
                render::render_dancers(&self.document, &bears, &plan.dancers);
            }
            None => log::warn!("[celebrate] missing .dancing-polar-bears"),
        }

        match dom::query_selector(&self.celebration_panel, ".celebration-hearts") {
            Some(hearts) => {
                let attached =
                    render::render_particles(&self.document, &hearts, &plan.hearts, "", HEART_VARS);
                log::debug!("[celebrate] hearts attached={}", attached);
                let clear_ms = plan.hearts_clear_after.as_millis() as u32;
                dom::set_timeout(clear_ms, move || dom::clear_children(&hearts));
            }
            None => log::warn!("[celebrate] missing .celebration-hearts"),
        }

        log::info!(
            "[celebrate] dancers={} hearts={} fireworks={}",
            plan.dancers.len(),
            plan.hearts.len(),
            plan.fireworks.particle_count()
        );
        self.spawn_side_fireworks(&plan.fireworks);
    }

    /// Two mirrored fans of hearts from the left and right screen edges. The
    /// container removes itself once the burst is over.
    pub fn spawn_side_fireworks(&self, plan: &FireworksPlan) {
        let Some(body) = self.document.body() else {
            return;
        };
        let Some(container) = dom::create_div(&self.document, "heart-fireworks") else {
            return;
        };
        if body.append_child(&container).is_err() {
            return;
        }

        for (class, particles) in [
            ("firework-burst firework-left", &plan.left),
            ("firework-burst firework-right", &plan.right),
        ] {
            let Some(burst) = dom::create_div(&self.document, class) else {
                continue;
            };
            let attached = render::render_particles(
                &self.document,
                &burst,
                particles,
                "firework-heart",
                FIREWORK_VARS,
            );
            log::debug!("[celebrate] {} attached={}", class, attached);
            _ = container.append_child(&burst);
        }

        let remove_ms = plan.remove_after.as_millis() as u32;
        dom::set_timeout(remove_ms, move || container.remove());
    }
}
