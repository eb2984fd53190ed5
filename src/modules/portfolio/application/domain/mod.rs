pub(crate) mod public_portfolio;

pub use public_portfolio::PublicPortfolio;
