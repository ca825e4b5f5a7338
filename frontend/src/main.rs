fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    frontend::start();
}
