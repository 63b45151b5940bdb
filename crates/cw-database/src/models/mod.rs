pub mod staging;
pub mod warehouse;

pub use staging::{
  BlockchainStatistic, CryptoQuote, DominanceSnapshot, ExchangeRateQuote, MacroAverages,
  SentimentText,
};
pub use warehouse::{
  NewBlockchainInfo, NewCorrelation, NewCryptoDim, NewCryptoInfo, NewDateDim, NewFactRow,
  NewSentimentDim, NewTechnicalIndicator,
};
