use grind_core::config::Secrets;
use std::path::Path;

pub fn run(root: &Path, port: u16) -> anyhow::Result<()> {
    let state = super::app_state(root)?;
    let secrets = Secrets::from_env();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(grind_server::serve(state, secrets, port))
}
