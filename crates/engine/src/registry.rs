//! Seed registry of tracked staking protocols.
//!
//! The registry is a fixed, ordered list. A protocol's position in the list
//! is part of its `protocol_id` (`<name>_<index>`), so entries must only be
//! appended, never reordered.

/// Static description of one tracked protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolDescriptor {
    /// Liquid token address. Empty while the token has no on-chain identifier.
    pub token_address: &'static str,
    /// Staking contract address, the unique key of a stored record.
    pub staking_address: &'static str,
    pub project_name: &'static str,
}

impl ProtocolDescriptor {
    /// Protocol id for this descriptor at registry position `index`.
    pub fn protocol_id(&self, index: usize) -> String {
        format!("{}_{}", self.project_name, index)
    }
}

pub const AAVE_STAKING_ADDRESS: &str =
    "erd1qqqqqqqqqqqqqpgq2qjlpjjr33a4hdl60ll7300apszjm8c9c8rsg5nymf";
pub const COMPOUND_STAKING_ADDRESS: &str =
    "erd1qqqqqqqqqqqqqpgq08dhtprrqlv3jnvankzfmnw4gjyuu23jc8rsq9n5tn";
pub const USDX_MONEY_STAKING_ADDRESS: &str =
    "erd1qqqqqqqqqqqqqpgqmul7urzjexlupmxuztcsjx4nwu6v07g5c8rsug5amm";

/// Protocols tracked on MultiversX devnet.
pub const SEED_REGISTRY: [ProtocolDescriptor; 3] = [
    ProtocolDescriptor {
        token_address: "",
        staking_address: AAVE_STAKING_ADDRESS,
        project_name: "AAVE",
    },
    ProtocolDescriptor {
        token_address: "",
        staking_address: COMPOUND_STAKING_ADDRESS,
        project_name: "Compound",
    },
    ProtocolDescriptor {
        token_address: "",
        staking_address: USDX_MONEY_STAKING_ADDRESS,
        project_name: "USDXMoney",
    },
];

/// Ordered, read-only view over a list of protocol descriptors.
#[derive(Debug, Clone)]
pub struct SeedRegistry {
    entries: Vec<ProtocolDescriptor>,
}

impl SeedRegistry {
    /// The built-in devnet registry.
    pub fn devnet() -> Self {
        Self::custom(SEED_REGISTRY.to_vec())
    }

    pub fn custom(entries: Vec<ProtocolDescriptor>) -> Self {
        Self { entries }
    }

    /// Look up an entry by signed index. Negative or past-the-end indices yield `None`.
    pub fn get(&self, index: i64) -> Option<(usize, &ProtocolDescriptor)> {
        let index = usize::try_from(index).ok()?;
        self.entries.get(index).map(|entry| (index, entry))
    }

    pub fn entries(&self) -> &[ProtocolDescriptor] {
        &self.entries
    }

    pub fn project_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.project_name.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SeedRegistry {
    fn default() -> Self {
        Self::devnet()
    }
}
