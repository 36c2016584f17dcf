use med_quiz::MedQuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Med Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(MedQuizApp::new()))),
    )
}

// En el navegador la app se cuelga de un canvas existente en el index.html
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");
        let canvas = document
            .get_element_by_id("med_quiz_canvas")
            .expect("No existe el elemento med_quiz_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("med_quiz_canvas no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(MedQuizApp::new()))),
            )
            .await
            .expect("No se pudo arrancar eframe");
    });
}
