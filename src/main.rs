fn main() {
    rolecheck::app::cli::run();
}
