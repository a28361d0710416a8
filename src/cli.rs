#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Expression to parse; a built-in sample expression is used when omitted
    pub expr: Option<String>,

    /// Print the token stream before the parsed tree
    #[arg(short, long)]
    pub tokens: bool,
}
