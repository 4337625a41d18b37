use chrono::{Duration, Utc};
use rand::Rng;

use crate::models::chart::{ChartDays, ChartPoint};
use crate::models::crypto::{
    CoinMatch, Cryptocurrency, MarketStats, Sparkline, TrendingCoin, TrendingData,
};
use crate::models::news::NewsItem;

/// Number of samples in a synthesized chart series.
const SYNTHETIC_POINTS: usize = 100;

/// Hourly samples in a 7-day sparkline.
const SPARKLINE_POINTS: usize = 168;

/// Static substitute data served whenever the upstream provider fails.
///
/// The figures are frozen market snapshots — plausible, not live. Nothing in
/// the catalog depends on the upstream being reachable.
pub struct FallbackCatalog {
    coins: Vec<Cryptocurrency>,
}

impl FallbackCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            coins: build_coins(),
        }
    }

    /// The fixed fallback market list. Not paginated — callers get the whole
    /// thing regardless of the page/per-page they asked for.
    #[must_use]
    pub fn coins(&self) -> &[Cryptocurrency] {
        &self.coins
    }

    /// Fallback detail: the entry matching `id` exactly, else the first entry.
    #[must_use]
    pub fn coin_detail(&self, id: &str) -> Cryptocurrency {
        self.coins
            .iter()
            .find(|c| c.id == id)
            .unwrap_or(&self.coins[0])
            .clone()
    }

    /// Fixed global snapshot.
    #[must_use]
    pub fn global_stats(&self) -> MarketStats {
        MarketStats {
            total_market_cap: 2_500_000_000_000.0,
            total_volume: 80_000_000_000.0,
            market_cap_percentage: [("btc".to_string(), 52.5), ("eth".to_string(), 16.8)]
                .into_iter()
                .collect(),
            market_cap_change_percentage_24h_usd: 1.25,
        }
    }

    /// Trending substitute derived from the first four fallback assets,
    /// reusing their price/volume/market-cap figures.
    #[must_use]
    pub fn trending(&self) -> Vec<TrendingCoin> {
        self.coins
            .iter()
            .take(4)
            .map(|c| TrendingCoin {
                id: c.id.clone(),
                coin_id: None,
                name: c.name.clone(),
                symbol: c.symbol.clone(),
                market_cap_rank: c.market_cap_rank,
                thumb: c.image.clone(),
                small: c.image.clone(),
                large: c.image.clone(),
                slug: Some(c.id.clone()),
                price_btc: Some(0.0001),
                score: Some(0),
                data: Some(TrendingData {
                    price: c.current_price,
                    price_change_percentage_24h: c.price_change_percentage_24h,
                    market_cap: c.market_cap,
                    total_volume: c.total_volume,
                }),
            })
            .collect()
    }

    /// Case-insensitive substring match against fallback names and symbols.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<CoinMatch> {
        let q = query.to_lowercase();
        self.coins
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&q) || c.symbol.to_lowercase().contains(&q)
            })
            .map(|c| CoinMatch {
                id: c.id.clone(),
                name: c.name.clone(),
                symbol: c.symbol.clone(),
                market_cap_rank: c.market_cap_rank,
                thumb: c.image.clone(),
                large: c.image.clone(),
            })
            .collect()
    }

    /// Random-walk series spanning the requested window. Strictly visual
    /// continuity — the values mean nothing. Fixed sample count, ascending
    /// timestamps, prices clamped non-negative.
    #[must_use]
    pub fn synthetic_chart(&self, days: ChartDays) -> Vec<ChartPoint> {
        let span_ms = f64::from(days.span_days()) * 24.0 * 60.0 * 60.0 * 1000.0;
        let now = Utc::now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let mut price = 50_000.0 + rng.gen::<f64>() * 10_000.0;

        let mut series = Vec::with_capacity(SYNTHETIC_POINTS);
        for i in (0..SYNTHETIC_POINTS).rev() {
            let offset = (i as f64 * span_ms / SYNTHETIC_POINTS as f64) as i64;
            price = (price + (rng.gen::<f64>() - 0.5) * 1_000.0).max(0.0);
            series.push(ChartPoint {
                timestamp: now - offset,
                price,
            });
        }
        series
    }

    /// Fixed news set. Contains nothing from filtered-out sources.
    #[must_use]
    pub fn news(&self) -> Vec<NewsItem> {
        let now = Utc::now();
        let at = |hours_ago: i64| {
            (now - Duration::hours(hours_ago))
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        };
        vec![
            NewsItem {
                id: "1".into(),
                title: "Bitcoin Surges Past $45k as Institutional Adoption Grows".into(),
                description: "The world's largest cryptocurrency has seen a significant rally \
                              this week, driven by renewed interest from major financial \
                              institutions and the approval of new ETFs."
                    .into(),
                url: "https://coindesk.com".into(),
                source: "CoinDesk".into(),
                published_at: at(2),
                image_url: Some(
                    "https://images.unsplash.com/photo-1518546305927-5a555bb7020d?q=80&w=2069&auto=format&fit=crop".into(),
                ),
                categories: vec!["Bitcoin".into(), "Market".into()],
            },
            NewsItem {
                id: "2".into(),
                title: "Ethereum Layer 2 Solutions Reach Record Total Value Locked".into(),
                description: "Scaling solutions for Ethereum are seeing unprecedented growth \
                              as users seek lower fees and faster transaction times."
                    .into(),
                url: "https://cointelegraph.com".into(),
                source: "CoinTelegraph".into(),
                published_at: at(5),
                image_url: Some(
                    "https://images.unsplash.com/photo-1622790698141-94e30457ef12?q=80&w=2072&auto=format&fit=crop".into(),
                ),
                categories: vec!["Ethereum".into(), "DeFi".into()],
            },
            NewsItem {
                id: "3".into(),
                title: "Regulatory Framework for Stablecoins Proposed by Central Bank".into(),
                description: "New guidelines aim to provide clarity and consumer protection \
                              in the rapidly evolving stablecoin market."
                    .into(),
                url: "https://bloomberg.com".into(),
                source: "Bloomberg Crypto".into(),
                published_at: at(12),
                image_url: Some(
                    "https://images.unsplash.com/photo-1605792657660-596af9009e82?q=80&w=2002&auto=format&fit=crop".into(),
                ),
                categories: vec!["Regulation".into(), "Stablecoins".into()],
            },
            NewsItem {
                id: "4".into(),
                title: "Web3 Gaming Sector Shows Resilience Despite Market Volatility".into(),
                description: "Blockchain-based games continue to attract users and investment, \
                              signaling a long-term shift in the gaming industry."
                    .into(),
                url: "https://decrypt.co".into(),
                source: "Decrypt".into(),
                published_at: at(24),
                image_url: Some(
                    "https://images.unsplash.com/photo-1614680376593-902f74cf0d41?q=80&w=1974&auto=format&fit=crop".into(),
                ),
                categories: vec!["Gaming".into(), "Web3".into()],
            },
            NewsItem {
                id: "5".into(),
                title: "New DeFi Protocol Promises Higher Yields with Lower Risk".into(),
                description: "A novel algorithmic approach to yield farming claims to solve \
                              the issue of impermanent loss for liquidity providers."
                    .into(),
                url: "https://theblock.co".into(),
                source: "The Block".into(),
                published_at: at(28),
                image_url: Some(
                    "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?q=80&w=2032&auto=format&fit=crop".into(),
                ),
                categories: vec!["DeFi".into(), "Technology".into()],
            },
            NewsItem {
                id: "6".into(),
                title: "NFT Market Volume Rebounds as Trading Activity Picks Up".into(),
                description: "After a quiet period, digital collectibles are seeing a \
                              resurgence in trading volume, led by blue-chip collections \
                              and utility-based NFTs."
                    .into(),
                url: "https://nftnow.com".into(),
                source: "NFT Now".into(),
                published_at: at(36),
                image_url: Some(
                    "https://images.unsplash.com/photo-1620321023374-d1a68fddadb3?q=80&w=2048&auto=format&fit=crop".into(),
                ),
                categories: vec!["NFT".into(), "Market".into()],
            },
        ]
    }
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic stand-in for a 7-day hourly sparkline.
fn sparkline(base: f64, spread: f64) -> Sparkline {
    let price = (0..SPARKLINE_POINTS)
        .map(|i| base + spread * (0.5 + 0.5 * (i as f64 * 0.37).sin()))
        .collect();
    Sparkline { price }
}

/// A coin template with every optional field empty; each catalog entry fills
/// in its own figures over this.
fn blank() -> Cryptocurrency {
    Cryptocurrency {
        id: String::new(),
        symbol: String::new(),
        name: String::new(),
        image: None,
        current_price: None,
        market_cap: None,
        market_cap_rank: None,
        fully_diluted_valuation: None,
        total_volume: None,
        high_24h: None,
        low_24h: None,
        price_change_24h: None,
        price_change_percentage_24h: None,
        market_cap_change_24h: None,
        market_cap_change_percentage_24h: None,
        circulating_supply: None,
        total_supply: None,
        max_supply: None,
        ath: None,
        ath_change_percentage: None,
        ath_date: None,
        atl: None,
        atl_change_percentage: None,
        atl_date: None,
        last_updated: None,
        sparkline_in_7d: None,
        price_change_percentage_7d_in_currency: None,
        description: None,
        links: None,
    }
}

fn build_coins() -> Vec<Cryptocurrency> {
    let stamped = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    vec![
        Cryptocurrency {
            id: "bitcoin".into(),
            symbol: "btc".into(),
            name: "Bitcoin".into(),
            image: Some("https://assets.coingecko.com/coins/images/1/large/bitcoin.png".into()),
            current_price: Some(65_432.0),
            market_cap: Some(1_200_000_000_000.0),
            market_cap_rank: Some(1),
            fully_diluted_valuation: Some(1_300_000_000_000.0),
            total_volume: Some(35_000_000_000.0),
            high_24h: Some(66_000.0),
            low_24h: Some(64_000.0),
            price_change_24h: Some(1_200.0),
            price_change_percentage_24h: Some(1.8),
            market_cap_change_24h: Some(20_000_000_000.0),
            market_cap_change_percentage_24h: Some(1.6),
            circulating_supply: Some(19_500_000.0),
            total_supply: Some(21_000_000.0),
            max_supply: Some(21_000_000.0),
            ath: Some(73_700.0),
            ath_change_percentage: Some(-11.2),
            ath_date: Some("2024-03-14T00:00:00.000Z".into()),
            atl: Some(67.81),
            atl_change_percentage: Some(95_000.0),
            atl_date: Some("2013-07-06T00:00:00.000Z".into()),
            last_updated: Some(stamped.clone()),
            sparkline_in_7d: Some(sparkline(64_000.0, 2_000.0)),
            price_change_percentage_7d_in_currency: Some(4.5),
            ..blank()
        },
        Cryptocurrency {
            id: "ethereum".into(),
            symbol: "eth".into(),
            name: "Ethereum".into(),
            image: Some("https://assets.coingecko.com/coins/images/279/large/ethereum.png".into()),
            current_price: Some(3_450.0),
            market_cap: Some(400_000_000_000.0),
            market_cap_rank: Some(2),
            fully_diluted_valuation: None,
            total_volume: Some(15_000_000_000.0),
            high_24h: Some(3_500.0),
            low_24h: Some(3_350.0),
            price_change_24h: Some(80.0),
            price_change_percentage_24h: Some(2.3),
            market_cap_change_24h: Some(8_000_000_000.0),
            market_cap_change_percentage_24h: Some(2.1),
            circulating_supply: Some(120_000_000.0),
            total_supply: Some(120_000_000.0),
            max_supply: None,
            ath: Some(4_878.0),
            ath_change_percentage: Some(-29.2),
            ath_date: Some("2021-11-10T00:00:00.000Z".into()),
            atl: Some(0.43),
            atl_change_percentage: Some(800_000.0),
            atl_date: Some("2015-10-20T00:00:00.000Z".into()),
            last_updated: Some(stamped.clone()),
            sparkline_in_7d: Some(sparkline(3_300.0, 300.0)),
            price_change_percentage_7d_in_currency: Some(8.2),
            ..blank()
        },
        Cryptocurrency {
            id: "solana".into(),
            symbol: "sol".into(),
            name: "Solana".into(),
            image: Some("https://assets.coingecko.com/coins/images/4128/large/solana.png".into()),
            current_price: Some(145.0),
            market_cap: Some(65_000_000_000.0),
            market_cap_rank: Some(5),
            fully_diluted_valuation: Some(75_000_000_000.0),
            total_volume: Some(3_000_000_000.0),
            high_24h: Some(148.0),
            low_24h: Some(140.0),
            price_change_24h: Some(3.5),
            price_change_percentage_24h: Some(2.4),
            market_cap_change_24h: Some(1_500_000_000.0),
            market_cap_change_percentage_24h: Some(2.3),
            circulating_supply: Some(443_000_000.0),
            total_supply: Some(572_000_000.0),
            max_supply: None,
            ath: Some(259.0),
            ath_change_percentage: Some(-44.0),
            ath_date: Some("2021-11-06T00:00:00.000Z".into()),
            atl: Some(0.5),
            atl_change_percentage: Some(28_000.0),
            atl_date: Some("2020-05-11T00:00:00.000Z".into()),
            last_updated: Some(stamped.clone()),
            sparkline_in_7d: Some(sparkline(140.0, 10.0)),
            price_change_percentage_7d_in_currency: Some(12.5),
            ..blank()
        },
        Cryptocurrency {
            id: "ripple".into(),
            symbol: "xrp".into(),
            name: "XRP".into(),
            image: Some(
                "https://assets.coingecko.com/coins/images/44/large/xrp-symbol-white-128.png"
                    .into(),
            ),
            current_price: Some(0.62),
            market_cap: Some(34_000_000_000.0),
            market_cap_rank: Some(6),
            fully_diluted_valuation: Some(62_000_000_000.0),
            total_volume: Some(1_200_000_000.0),
            high_24h: Some(0.63),
            low_24h: Some(0.60),
            price_change_24h: Some(0.01),
            price_change_percentage_24h: Some(1.6),
            market_cap_change_24h: Some(500_000_000.0),
            market_cap_change_percentage_24h: Some(1.5),
            circulating_supply: Some(55_000_000_000.0),
            total_supply: Some(100_000_000_000.0),
            max_supply: Some(100_000_000_000.0),
            ath: Some(3.40),
            ath_change_percentage: Some(-81.0),
            ath_date: Some("2018-01-07T00:00:00.000Z".into()),
            atl: Some(0.002),
            atl_change_percentage: Some(26_000.0),
            atl_date: Some("2014-05-22T00:00:00.000Z".into()),
            last_updated: Some(stamped.clone()),
            sparkline_in_7d: Some(sparkline(0.60, 0.05)),
            price_change_percentage_7d_in_currency: Some(-2.1),
            ..blank()
        },
        Cryptocurrency {
            id: "dogecoin".into(),
            symbol: "doge".into(),
            name: "Dogecoin".into(),
            image: Some("https://assets.coingecko.com/coins/images/5/large/dogecoin.png".into()),
            current_price: Some(0.16),
            market_cap: Some(23_000_000_000.0),
            market_cap_rank: Some(8),
            fully_diluted_valuation: None,
            total_volume: Some(1_800_000_000.0),
            high_24h: Some(0.17),
            low_24h: Some(0.15),
            price_change_24h: Some(0.008),
            price_change_percentage_24h: Some(5.2),
            market_cap_change_24h: Some(1_200_000_000.0),
            market_cap_change_percentage_24h: Some(5.1),
            circulating_supply: Some(143_000_000_000.0),
            total_supply: Some(143_000_000_000.0),
            max_supply: None,
            ath: Some(0.73),
            ath_change_percentage: Some(-78.0),
            ath_date: Some("2021-05-08T00:00:00.000Z".into()),
            atl: Some(0.00008),
            atl_change_percentage: Some(180_000.0),
            atl_date: Some("2015-05-06T00:00:00.000Z".into()),
            last_updated: Some(stamped),
            sparkline_in_7d: Some(sparkline(0.15, 0.03)),
            price_change_percentage_7d_in_currency: Some(8.4),
            ..blank()
        },
    ]
}
