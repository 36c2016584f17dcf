mod helpers;
pub mod layout;
pub mod views;

use crate::app::MedQuizApp;
use crate::model::View;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for MedQuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Recoge el resultado de una generación en vuelo, si lo hay
        self.poll_generation();

        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch por vista a las funciones en views/
        match self.view {
            View::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            View::Generator => views::generator::ui_generator(self, ctx),
            View::Quiz => views::quiz::ui_quiz(self, ctx),
            View::Stats => views::stats::ui_stats(self, ctx),
        }

        if self.show_restore {
            views::dashboard::ui_restore_dialog(self, ctx);
        }

        // Mientras hay una petición en vuelo seguimos repintando para
        // sondear el canal aunque no haya input del usuario
        if self.is_generation_pending() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        // El documento ya se guarda en cada mutación; esto solo cubre el
        // cierre de la pestaña o de la ventana.
        self.persist();
    }
}
