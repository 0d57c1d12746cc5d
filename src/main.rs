use anyhow::Result;
use clap::Parser;
use coocc2inter::convert::{self, ConvertArgs};

fn main() -> Result<()> {
    let args = ConvertArgs::parse();
    convert::run(args)
}
