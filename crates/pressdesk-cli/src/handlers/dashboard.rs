use crate::context::ExecutionContext;
use crate::presentation::DashboardApp;
use anyhow::Result;
use is_terminal::IsTerminal;
use tokio::runtime::Runtime;

pub fn handle(ctx: &ExecutionContext, runtime: &Runtime) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("The dashboard needs an interactive terminal; try `pressdesk list` instead");
    }

    DashboardApp::new(ctx.dashboard()?, ctx.preview()?, ctx.user_label()).run(runtime)
}
