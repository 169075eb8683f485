// CLI module
// Public interface for the interactive chat loop

pub mod repl;
