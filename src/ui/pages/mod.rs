pub mod home;
pub mod prices;

pub use home::HomePage;
pub use prices::PricesPage;
