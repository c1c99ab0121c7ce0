//! Static transcript text.

pub const PROMPT: &str = "elyra@os:~$";

pub const WELCOME_BANNER: [&str; 4] = [
    "╔═══════════════════════════════════════════╗",
    "║     Welcome to ElyraOS Terminal v1.0     ║",
    "║   Your cute on-chain companion awaits!   ║",
    "╚═══════════════════════════════════════════╝",
];

pub const WELCOME_HINT: &str = "Type 'help' to see available commands.";

pub const HELP_TEXT: &str = "
╔═══════════════════════════════════════════════════════════════╗
║  ELYRAOS INTELLIGENCE TERMINAL v1.0                           ║
║  ═══════════════════════════════════════════════════════════  ║
║  High-End Analysis Engine | Powered by ElizaOS                ║
╠═══════════════════════════════════════════════════════════════╣
║                                                               ║
║  MARKET ANALYSIS                                              ║
║  ─────────────────                                            ║
║  trending             Trending tokens on DexScreener          ║
║  newpairs             Recently launched tokens                ║
║  sol                  SOL price & network info                ║
║                                                               ║
║  TOKEN INTELLIGENCE                                           ║
║  ─────────────────────                                        ║
║  scan <CA>            Advanced intelligence scan              ║
║  analyze <CA>         Basic token analysis                    ║
║                                                               ║
║  AI INTELLIGENCE                                              ║
║  ─────────────────                                            ║
║  ask \"<question>\"     AI-powered analysis (natural lang)      ║
║  ask \"<question>\" <CA> AI analysis with token context         ║
║                                                               ║
║  UTILITIES                                                    ║
║  ────────────                                                 ║
║  status               System status                           ║
║  about                About Elyra                             ║
║  clear                Clear terminal                          ║
║  help                 Show this menu                          ║
║                                                               ║
║  Example: scan DuMbhu7mvQvqQHGcnikDgb4XegXJRyhUBfdU22uELiZA   ║
║  Example: ask \"is this token safe?\" <CA>                      ║
╚═══════════════════════════════════════════════════════════════╝";

pub const ABOUT_TEXT: &str = "ElyraOS v1.0.0
Your on-chain companion with DeFi expertise,
smart contract architecture insights,
and cryptocurrency token monitoring.

Built with love using ElizaOS framework.";

pub const STATUS_TEXT: &str = "
╔═══════════════════════════════════════════╗
║  ELYRAOS SYSTEM STATUS                    ║
╠═══════════════════════════════════════════╣
║  System:      ONLINE                      ║
║  API:         CONNECTED                   ║
║  ElizaOS:     v1.0.0                      ║
║  Network:     Solana Mainnet              ║
╚═══════════════════════════════════════════╝";

pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";
pub const SCAN_USAGE: &str = "Usage: scan <contract_address>";
pub const ASK_USAGE: &str = "Usage: ask \"<your question>\" [contract_address]";
pub const TOKEN_NOT_FOUND: &str = "Token not found. Please check the contract address.";
pub const THINKING: &str = "Elyra is thinking...";

pub fn input_echo(raw: &str) -> String {
    return format!("{} {}", PROMPT, raw);
}

pub fn command_not_found(name: &str) -> String {
    return format!(
        "Command not found: {}. Type 'help' for available commands.",
        name
    );
}

pub fn scanning(address: &str) -> String {
    let short: String = address.chars().take(8).collect();
    return format!("Scanning token {}...", short);
}

pub fn answer(text: &str) -> String {
    return format!("\nElyra: {}", text);
}
