use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::catalog::CatalogProfile;
use crate::reports::write_profile;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Report the catalog's missing values before and after normalization
pub fn profile_catalog<H: Host>(host: &mut H, args: &ProfileArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let raw = common.load_raw()?;
    let sets = common.build_sets(&raw);
    let profile = CatalogProfile::new(&raw, &sets.titles);

    let mut text = String::new();
    write_profile(&profile, common.use_colors, &mut text)?;
    let _ = write!(host.output(), "{text}");
    Ok(())
}
