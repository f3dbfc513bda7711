use anyhow::Result;
use clap::Args;

use crate::inputs::InputArgs;
use crate::request::Request;

/// Print the resolved request without performing it
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

        println!("Mode:         {}", request.mode);
        println!("URL:          {}", request.url);
        println!(
            "Credentials:  {}",
            if request.credentials.is_some() {
                "basic auth"
            } else {
                "none"
            }
        );
        Ok(())
    }
}
