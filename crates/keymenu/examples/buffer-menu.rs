use keymenu::{
    Menu,
    MenuAction,
    MenuCommand,
    MenuError,
    MenuRegistry,
    MenuRunner,
    TerminalMinibuffer,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MenuError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let buffer = Menu::new("Buffer ops", vec![])
        .item('k', "Kill", MenuAction::call(|| println!("Killed buffer")))
        .item('b', "Bury", MenuAction::call(|| println!("Buried buffer")));
    let help = Menu::new("Help ops", vec![])
        .item('f', "Describe function", MenuAction::call(|| println!("No function at point")))
        .item('v', "Describe variable", MenuAction::call(|| println!("No variable at point")))
        .item('o', "Buffer ops", MenuAction::open("buffer-menu"));

    let registry = MenuRegistry::new().with("buffer-menu", buffer).with("help-menu", help);
    let mut runner = MenuRunner::new(registry, TerminalMinibuffer::new());

    // Start from the menu named on the command line, or from the list of menus.
    let cmd = match std::env::args().nth(1) {
        Some(name) => MenuCommand::new(name),
        None => MenuCommand::menus(),
    };

    let outcome = cmd.invoke(&mut runner)?;
    println!("Menu finished: {outcome:?}");

    Ok(())
}
