// Profile registry: profile identity -> data length, channel set and codec

use super::id::EepId;
use super::message::EepMessage;
use super::traits::{Eep, EepError, EepFactory, EepResult};
use super::transform::{BuiltinTransformations, TransformationService};
use crate::core::ChannelSpec;
use crate::telegram::Erp1Telegram;
use std::collections::HashMap;
use std::sync::Arc;

/// Static description of one supported profile
#[derive(Debug, Clone)]
pub struct ProfileDescriptor {
    pub eep: EepId,
    pub data_length: usize,
    pub channels: &'static [ChannelSpec],
    pub thing_type: &'static str,
    pub description: &'static str,
    pub factory: EepFactory,
}

impl ProfileDescriptor {
    pub const fn new(
        eep: EepId,
        data_length: usize,
        channels: &'static [ChannelSpec],
        thing_type: &'static str,
        description: &'static str,
        factory: EepFactory,
    ) -> Self {
        Self {
            eep,
            data_length,
            channels,
            thing_type,
            description,
            factory,
        }
    }

    pub fn channel(&self, channel_id: &str) -> Option<ChannelSpec> {
        self.channels.iter().copied().find(|c| c.id == channel_id)
    }

    pub fn supports(&self, channel_id: &str) -> bool {
        self.channel(channel_id).is_some()
    }

    /// Channel ids in declaration order
    pub fn channel_ids(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.id).collect()
    }
}

inventory::collect!(ProfileDescriptor);

/// Registry of profiles, built once at startup and read-only afterwards
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<EepId, Arc<ProfileDescriptor>>,
    transformations: Arc<dyn TransformationService>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRegistry {
    /// Empty registry using the built-in transformations
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            transformations: Arc::new(BuiltinTransformations),
        }
    }

    /// Registry holding every profile compiled into the crate
    pub fn builtin() -> EepResult<Self> {
        let mut registry = Self::new();
        for descriptor in inventory::iter::<ProfileDescriptor> {
            registry.register(descriptor.clone())?;
        }

        tracing::debug!("Registered {} built-in profiles", registry.len());
        Ok(registry)
    }

    /// Replace the transformation collaborator handed to codecs
    pub fn with_transformations(mut self, transformations: Arc<dyn TransformationService>) -> Self {
        self.transformations = transformations;
        self
    }

    /// Add a profile. Each identity may only be registered once, and the data
    /// length must agree with RORGs that fix it.
    pub fn register(&mut self, descriptor: ProfileDescriptor) -> EepResult<()> {
        let eep = descriptor.eep;

        if let Some(fixed) = eep.family().and_then(|rorg| rorg.data_length()) {
            if fixed != descriptor.data_length {
                return Err(EepError::InvalidPayloadLength {
                    expected: fixed,
                    actual: descriptor.data_length,
                });
            }
        }

        if self.profiles.contains_key(&eep) {
            return Err(EepError::DuplicateProfile(eep));
        }

        tracing::debug!("Registering profile {}: {}", eep, descriptor.description);
        self.profiles.insert(eep, Arc::new(descriptor));
        Ok(())
    }

    pub fn resolve(&self, eep: &EepId) -> EepResult<Arc<ProfileDescriptor>> {
        self.profiles
            .get(eep)
            .cloned()
            .ok_or(EepError::ProfileNotFound(*eep))
    }

    pub fn supported_channels(&self, eep: &EepId) -> EepResult<Vec<&'static str>> {
        Ok(self.resolve(eep)?.channel_ids())
    }

    pub fn contains(&self, eep: &EepId) -> bool {
        self.profiles.contains_key(eep)
    }

    /// All profiles, sorted by identity
    pub fn list(&self) -> Vec<Arc<ProfileDescriptor>> {
        let mut profiles: Vec<_> = self.profiles.values().cloned().collect();
        profiles.sort_by_key(|d| d.eep);
        profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Slice raw bytes using the data length of `eep`
    pub fn parse(&self, raw: &[u8], eep: &EepId) -> EepResult<Erp1Telegram> {
        let descriptor = self.resolve(eep)?;
        let telegram = Erp1Telegram::parse(raw, descriptor.data_length)?;

        if telegram.rorg() != eep.rorg {
            return Err(EepError::RorgMismatch {
                expected: eep.rorg,
                actual: telegram.rorg(),
            });
        }

        Ok(telegram)
    }

    /// Build the codec for a received telegram
    pub fn decode_telegram(
        &self,
        telegram: &Erp1Telegram,
        eep: &EepId,
    ) -> EepResult<Box<dyn Eep>> {
        let descriptor = self.resolve(eep)?;
        let factory = descriptor.factory;
        let message =
            EepMessage::from_telegram(descriptor, self.transformations.clone(), telegram)?;
        Ok(factory(message))
    }

    /// Parse raw bytes and build the codec for them
    pub fn decode(&self, raw: &[u8], eep: &EepId) -> EepResult<Box<dyn Eep>> {
        let telegram = self.parse(raw, eep)?;
        self.decode_telegram(&telegram, eep)
    }

    /// Build an outbound codec with a zeroed payload
    pub fn create(&self, eep: &EepId) -> EepResult<Box<dyn Eep>> {
        let descriptor = self.resolve(eep)?;
        let factory = descriptor.factory;
        Ok(factory(EepMessage::new(descriptor, self.transformations.clone())))
    }
}

/// Register a profile with the built-in registry at link time
#[macro_export]
macro_rules! register_profile {
    (
        $eep:expr,
        $data_length:expr,
        $channels:expr,
        $thing_type:expr,
        $description:expr,
        $factory:expr
    ) => {
        inventory::submit! {
            $crate::eep::registry::ProfileDescriptor::new(
                $eep,
                $data_length,
                $channels,
                $thing_type,
                $description,
                $factory
            )
        }
    };
}
