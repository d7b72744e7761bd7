mod test_implied_volatility;
mod test_properties;
