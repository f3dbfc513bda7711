use anyhow::Result;
use clap::Args;

use crate::inputs::InputArgs;
use crate::request::Request;
use crate::{emit, fetch};

/// Fetch the remote document and export every entry
#[derive(Args, Debug)]
#[command()]
pub struct Cli {
    #[command(flatten)]
    inputs: InputArgs,
}

impl Cli {
    pub fn exec(self) -> Result<()> {
        let inputs = self.inputs.resolve();
        inputs.validate()?;

        let request = Request::build(&inputs)?;
        debug!("{} GET {}", request.mode, request.url);

        let document = fetch::fetch(&request)?;
        let exports = emit::render(&inputs, &document);
        emit::apply(&exports)?;

        display!("Successfully exported {} entries", exports.len());
        Ok(())
    }
}
