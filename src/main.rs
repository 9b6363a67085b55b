// Rewrites the college logo in place with its white background made transparent.

use white_knockout::make_white_transparent;
use white_knockout::transparency::DEFAULT_TARGET;

fn init_logger() {
    // Logs go to stderr; stdout only ever carries the completion message.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("white_knockout=info"))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    make_white_transparent(DEFAULT_TARGET)?;
    println!("Done");

    Ok(())
}
