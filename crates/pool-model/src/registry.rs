// ============ Chain deployment tables ============

/// A DEX router the pool can graduate its liquidity to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
    pub name: &'static str,
    pub address: &'static str,
}

/// Deployment and display constants for one supported chain.
///
/// `manager` is the diamond proxy hosting the pool manager facet;
/// `native_price_usd` is the board's static quote for the chain's gas coin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    pub manager: &'static str,
    pub native_price_usd: f64,
    pub explorer: &'static str,
    pub routers: &'static [Router],
}

/// Launch categories offered by the creation form.
pub const TAGS: [&str; 10] = [
    "Meme", "AI", "DeFi", "Games", "Infra", "De-Sci", "Social", "Depin", "Charity", "Others",
];

pub const CHAINS: [Chain; 3] = [
    Chain {
        id: 1868,
        name: "Soneium",
        manager: "0x300EB5D633c8154466aFC73E98328E882E3D843D",
        native_price_usd: 0.9993,
        explorer: "https://soneium.blockscout.com",
        routers: &[Router {
            name: "SoneFi",
            address: "0xeCef53F5024Dc8A0cCf0766C6775081e27448425",
        }],
    },
    Chain {
        id: 97,
        name: "BSC Testnet",
        manager: "0x4fDB78C09535C3848B660b1b44B3d5EF8a5dDE8b",
        native_price_usd: 67754.0,
        explorer: "https://testnet.bscscan.com",
        routers: &[
            Router {
                name: "Pancake Swap",
                address: "0xD99D1c33F9fC3444f8101754aBC46c52416550D1",
            },
            Router {
                name: "House Swap",
                address: "0xda8e9632c013c9d6a5fbabac9e2ecdf69706a306",
            },
        ],
    },
    Chain {
        id: 1116,
        name: "Core",
        manager: "0xa9193FA577687cD4E3C4405A1465B4e8f8d6Da98",
        native_price_usd: 1.087,
        explorer: "https://scan.coredao.org",
        routers: &[Router {
            name: "Falco Swap",
            address: "0x2C34490b5E30f3C6838aE59c8c5fE88F9B9fBc8A",
        }],
    },
];

/// Look up a supported chain by id.
pub fn chain(id: u64) -> Option<&'static Chain> {
    CHAINS.iter().find(|chain| chain.id == id)
}

impl Chain {
    /// Display name of a router, matched case-insensitively on the address.
    pub fn router_name(&self, address: &str) -> Option<&'static str> {
        self.routers
            .iter()
            .find(|router| router.address.eq_ignore_ascii_case(address))
            .map(|router| router.name)
    }

    /// Explorer deep link for a token address.
    pub fn token_url(&self, token: &str) -> String {
        format!("{}/token/{}", self.explorer, token)
    }
}

/// `0x1234…abcd` ellipsis form used next to explorer links.
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
