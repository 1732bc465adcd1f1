use workbench_starter::display::print_error;

fn main() {
    if let Err(e) = workbench_starter::run() {
        print_error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
