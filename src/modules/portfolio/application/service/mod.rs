mod public_portfolio_service;

pub use public_portfolio_service::PublicPortfolioService;
