use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    modgraph completions bash > ~/.bash_completion.d/modgraph\n\n\
                  Generate zsh completions:\n    modgraph completions zsh > ~/.zfunc/_modgraph\n\n\
                  Generate fish completions:\n    modgraph completions fish > ~/.config/fish/completions/modgraph.fish\n\n\
                  Generate PowerShell completions:\n    modgraph completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
