//! Canned replies for the chat screen.
//!
//! Replies are picked by substring match over a fixed, ordered keyword
//! table. The first keyword contained in the lower-cased message wins, so
//! table order decides overlaps such as `hello`/`hi`.

pub const GREETING: &str = "Hey! I'm Elyra, your on-chain companion. I specialize in DeFi, smart contracts, and cryptocurrency analysis. Ask me anything about blockchain, tokens, or the ElizaOS ecosystem!";

pub const DEFAULT_REPLY: &str = "That's an interesting question! As your on-chain companion, I'm here to help with DeFi protocols, smart contract analysis, token monitoring, and blockchain knowledge. Could you tell me more about what you'd like to know? I'm particularly good with Solana, Ethereum, and the ElizaOS ecosystem.";

pub const REPLIES: &[(&str, &str)] = &[
    (
        "hello",
        "Hey there! I'm Elyra, your on-chain companion. I specialize in DeFi, smart contracts, and crypto market analysis. How can I help you today?",
    ),
    (
        "hi",
        "Hi! Nice to meet you. I'm Elyra, here to help you navigate the world of blockchain and DeFi. What would you like to know?",
    ),
    (
        "defi",
        "DeFi (Decentralized Finance) is an ecosystem of financial applications built on blockchain networks. It removes intermediaries like banks, allowing you to lend, borrow, trade, and earn yield directly through smart contracts. Think of it as a 24/7 open financial system where you maintain full control of your assets!",
    ),
    (
        "solana",
        "Solana is a high-performance blockchain known for its fast transaction speeds (up to 65,000 TPS) and low fees. It's home to many popular DeFi protocols, NFT marketplaces, and the ElizaOS ecosystem. The native token SOL is used for transactions and staking.",
    ),
    (
        "ethereum",
        "Ethereum is the leading smart contract platform and the birthplace of DeFi. It pioneered programmable money and hosts thousands of dApps. While gas fees can be high during congestion, Layer 2 solutions like Arbitrum and Base are making it more accessible.",
    ),
    (
        "elizaos",
        "ElizaOS is a TypeScript framework for building autonomous AI agents. It allows you to create agents with unique personalities, equip them with plugins, and deploy them across multiple platforms. The $ELIZA token is part of the ai16z ecosystem.",
    ),
    (
        "token",
        "I can help you analyze tokens! Key metrics to consider: market cap, liquidity, trading volume, holder distribution, and smart contract security. Would you like me to check a specific token for you?",
    ),
    (
        "wallet",
        "Wallet security is crucial! Here are my top tips:\n\n1. Never share your seed phrase\n2. Use hardware wallets for large holdings\n3. Enable 2FA on exchanges\n4. Verify contract addresses before interacting\n5. Start with small test transactions\n6. Be wary of DMs - most are scams!",
    ),
    (
        "smart",
        "Smart contracts are self-executing programs stored on a blockchain. They automatically enforce agreements when conditions are met. For example, a DEX smart contract can swap tokens instantly without a middleman. Always verify contracts are audited before interacting!",
    ),
];

pub fn reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    REPLIES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, response)| *response)
        .unwrap_or(DEFAULT_REPLY)
}
