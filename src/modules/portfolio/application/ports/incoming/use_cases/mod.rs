mod get_public_portfolio;

pub use get_public_portfolio::{GetPublicPortfolioError, GetPublicPortfolioUseCase};
