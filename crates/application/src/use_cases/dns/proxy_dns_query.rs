use crate::ports::{UpstreamRequest, UpstreamResolver, UpstreamResponse};
use bytes::Bytes;
use ferrous_doh_domain::wire::{build_opt_for, has_opt_record, split_header_and_question};
use ferrous_doh_domain::{ClientAddress, DomainError, EcsPrefixes, MessageRewriter};
use std::sync::Arc;
use tracing::{debug, warn};

/// Forwards a wire-format query, adding an ECS option for the client when the
/// query does not already carry an OPT record.
pub struct ProxyDnsQueryUseCase {
    resolver: Arc<dyn UpstreamResolver>,
    ecs_enabled: bool,
    prefixes: EcsPrefixes,
    rewriter: MessageRewriter,
}

impl ProxyDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn UpstreamResolver>) -> Self {
        Self {
            resolver,
            ecs_enabled: true,
            prefixes: EcsPrefixes::default(),
            rewriter: MessageRewriter::new(),
        }
    }

    pub fn with_ecs(mut self, enabled: bool, prefixes: EcsPrefixes) -> Self {
        self.ecs_enabled = enabled;
        self.prefixes = prefixes;
        self
    }

    pub fn with_rewriter(mut self, rewriter: MessageRewriter) -> Self {
        self.rewriter = rewriter;
        self
    }

    pub async fn execute(
        &self,
        message: Bytes,
        client_ip: Option<&str>,
    ) -> Result<UpstreamResponse, DomainError> {
        let outgoing = self.prepare(message, client_ip)?;
        self.resolver
            .resolve(UpstreamRequest::wire(outgoing, client_ip))
            .await
    }

    /// Returns the message that will actually be sent upstream.
    pub fn prepare(&self, message: Bytes, client_ip: Option<&str>) -> Result<Bytes, DomainError> {
        if has_opt_record(&message)? {
            debug!("Query already carries an OPT record, forwarding unchanged");
            return Ok(message);
        }

        let Some(raw_ip) = client_ip.filter(|_| self.ecs_enabled) else {
            return Ok(message);
        };

        let address = match ClientAddress::parse(raw_ip) {
            Ok(address) => address,
            Err(e) => {
                warn!(client_ip = %raw_ip, error = %e, "Skipping ECS for unparseable client address");
                return Ok(message);
            }
        };

        let prefix = self.prefixes.for_address(&address);
        let (header_and_question, _) = split_header_and_question(&message)?;
        let opt = build_opt_for(&address, prefix);
        let rewritten = self.rewriter.splice_opt(header_and_question, &opt)?;

        debug!(
            client_ip = %address,
            source_prefix = prefix,
            original_len = message.len(),
            rewritten_len = rewritten.len(),
            "Injected ECS option"
        );

        Ok(Bytes::from(rewritten))
    }
}
