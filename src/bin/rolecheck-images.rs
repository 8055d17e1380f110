fn main() {
    rolecheck::app::cli::images::run();
}
