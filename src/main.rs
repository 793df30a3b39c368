mod cli;
mod error;
mod options;
mod terminal_page;
mod tools;
mod transport;

#[macro_use]
extern crate log;

use crate::cli::open_dialog;
use crate::error::ApplicationError::DialogNotOpened;
use crate::error::Result;
use crate::options::CommandLineOptions;
use crate::terminal_page::TerminalPage;
use crate::tools::web::build_session_client;
use crate::transport::ReqwestTransport;
use confirmation::{ConfirmationDialog, SubmissionOutcome};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(SubmissionOutcome::Completed(_)) => ExitCode::SUCCESS,
        Ok(outcome) => {
            debug!("Action not completed: {outcome:?}");
            ExitCode::FAILURE
        }
        Err(error) => {
            error!("{error}");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<SubmissionOutcome> {
    let options = CommandLineOptions::from_args()?;
    let client = build_session_client(
        options.base_url(),
        options.session_id().as_deref(),
        options.page_config().csrf_token(),
    )?;
    let transport = ReqwestTransport::new(client, options.base_url().clone());
    let dialog = ConfirmationDialog::new(options.page_config().clone(), transport);
    let mut page = TerminalPage::from_args()?;

    let target_id = options.target_id().as_deref();
    let context = open_dialog(&dialog, &mut page, options.action(), target_id)
        .ok_or_else(|| DialogNotOpened(options.action().clone()))?;

    page.prompt_password()?;
    Ok(dialog.submit(&mut page, &context).await)
}
