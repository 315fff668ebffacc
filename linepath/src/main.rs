use clap::Parser;
use linepath::app::LineApp;

fn main() {
    env_logger::init();
    let args = LineApp::parse();
    match args.op.run() {
        Ok(_) => {}
        Err(e) => {
            log::error!("linepath failed: {e}");
            std::process::exit(1);
        }
    }
}
