pub mod p900_portfolio_view;
