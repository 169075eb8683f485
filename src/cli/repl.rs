// Interactive chat loop
//
// Thin driver around the router: read a line, route it, print the reply.
// Holds no conversation history; every turn is independent.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio_util::sync::CancellationToken;

use crate::triage::TriageRouter;

const GREETING: &str = "Hello, I'm your medical assistant. How can I help you today?";
const CLOSING: &str = "Thank you for using our medical assistant. Take care and goodbye.";

/// Whether the user is ending the conversation.
fn is_farewell(input: &str) -> bool {
    let lowered = input.to_lowercase();
    lowered.contains("goodbye") || lowered.contains("thank you")
}

/// Run the interactive loop until the user says goodbye or EOF.
pub async fn run(router: &TriageRouter) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("{}", GREETING);

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                editor.add_history_entry(input)?;

                if is_farewell(input) {
                    println!("{}", CLOSING);
                    break;
                }

                // Fresh token per turn; Ctrl-C aborts only this request.
                let cancel = CancellationToken::new();
                let route = router.route(input, &cancel);
                tokio::select! {
                    result = route => match result {
                        Ok(reply) => println!("{}", reply),
                        Err(e) => eprintln!("Error: {:#}", e),
                    },
                    _ = tokio::signal::ctrl_c() => {
                        cancel.cancel();
                        println!("(request cancelled)");
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", CLOSING);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
