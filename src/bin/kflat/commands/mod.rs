mod fields;
mod render;

use fields::{run_fields, run_types};
use render::run_render;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Render(args) => run_render(args, ctx),
        Command::Fields(args) => run_fields(args),
        Command::Types => run_types(),
    }
}
