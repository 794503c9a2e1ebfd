use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradecheck", about = "Entry checklist and fixed-leverage stop-loss calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the checklist
    List {
        #[arg(long)]
        json: bool,
    },
    /// Add a condition
    Add {
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        details: Option<String>,
    },
    /// Edit a condition; omitted fields keep their value
    Update {
        id: u64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        details: Option<String>,
        /// O (satisfied) or X (unsatisfied)
        #[arg(long)]
        status: Option<String>,
    },
    /// Flip a condition between satisfied and unsatisfied
    Toggle { id: u64 },
    /// Remove a condition
    Remove { id: u64 },
    /// Show the calculator inputs
    Inputs,
    /// Run the leverage calculator (requires every condition satisfied)
    Calc {
        /// long or short
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        entry_price: Option<String>,
        /// Remembered for later runs
        #[arg(long)]
        total_capital: Option<String>,
        /// Remembered for later runs
        #[arg(long)]
        entry_capital: Option<String>,
        #[arg(long)]
        risk_percent: Option<String>,
        #[arg(long)]
        leverage: Option<String>,
        #[arg(long)]
        risk_reward_ratio: Option<String>,
        #[arg(long)]
        fee_rate: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Restore the calculator defaults
    Reset,
}
