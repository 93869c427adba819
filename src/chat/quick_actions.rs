/// Canned prompts a user can submit without typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Products,
    Prices,
    Order,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::Products,
        QuickAction::Prices,
        QuickAction::Order,
    ];

    /// Prompt submitted on the user's behalf.
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::Products => "Show me your products",
            QuickAction::Prices => "What are your prices?",
            QuickAction::Order => "I want to place an order",
        }
    }

    /// Slash command that triggers the action in the terminal chat.
    pub fn command(&self) -> &'static str {
        match self {
            QuickAction::Products => "/products",
            QuickAction::Prices => "/prices",
            QuickAction::Order => "/order",
        }
    }

    pub fn from_command(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.command().eq_ignore_ascii_case(input))
    }
}
