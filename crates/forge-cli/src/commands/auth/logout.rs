use serde::Serialize;

use forge_auth::Session;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = Session::new();
    forge_auth::logout(&mut session)?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
