use daybook_core::advice::AdviceClient;

use crate::app::AppContext;
use crate::cli::AdviceArgs;
use crate::errors::CliError;
use crate::output::print_advice;
use crate::ui::Spinner;

use super::load_snapshot;

pub fn handle_advice(ctx: &AppContext, args: &AdviceArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let health = ctx.health()?;
    let current = load_snapshot(&health, &ctx.clock())?.current;
    let client = ctx.advice_client()?;

    let spinner = Spinner::new(&ui_ctx, "Asking the health assistant");
    spinner.start();
    let advice = match client.analyze(&current) {
        Ok(advice) => {
            if ui_ctx.mode.is_pretty() && !ctx.quiet() {
                spinner.finish("Assessment received");
            } else {
                spinner.clear();
            }
            advice
        }
        Err(err) => {
            spinner.clear();
            return Err(CliError::AdviceUnavailable(err.to_string()).into());
        }
    };

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        print_advice(&ui_ctx, &advice);
    }
    Ok(())
}
