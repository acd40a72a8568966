use lights_frontend::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    gloo_console::log!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
