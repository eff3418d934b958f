fn main() {
    let presenter_factory = curve_explorer::PixelsPresenterFactory::new();
    let command = curve_explorer::RunGuiCommand::new(presenter_factory);

    command.execute();
}
