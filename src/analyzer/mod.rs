/// Analysis pipeline
///
/// One linear flow per request:
/// resolve input -> market data -> holder count -> risk brief -> report.
/// Each stage is a pure transformation or a single external call. Hard
/// failures abort the remaining stages; the holder count and risk brief
/// stages degrade instead of failing.
pub mod facts;
pub mod report;
pub mod risk;

pub use facts::{Report, RiskBrief, RiskLevel, TokenFacts};

use crate::apis::dexscreener::DexScreenerClient;
use crate::apis::holders::HoldersClient;
use crate::apis::llm::{build_llm_client, LlmClient};
use crate::config::Config;
use crate::errors::AnalyzeResult;
use crate::extractor::{AddressCandidate, ChainGuess};
use crate::logger::{self, LogTag};
use crate::resolver::{self, PageResolver, ResolvedInput};
use std::sync::Arc;
use std::time::Instant;

/// Read-only pipeline context built once at startup
///
/// Holds the configured clients; no mutable state is shared between
/// requests.
pub struct Analyzer {
    config: Config,
    page_resolver: PageResolver,
    market_client: DexScreenerClient,
    holders_client: HoldersClient,
    llm_client: Option<Arc<dyn LlmClient>>,
}

impl Analyzer {
    /// Build the pipeline from startup configuration
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let llm_client = build_llm_client(&config.apis.llm);
        if llm_client.is_none() {
            logger::warning(
                LogTag::Analyzer,
                "No LLM credential configured; risk narratives will be unavailable",
            );
        }

        Ok(Self {
            config: config.clone(),
            page_resolver: PageResolver::new(&config.analyzer)?,
            market_client: DexScreenerClient::new(&config.apis.dexscreener)?,
            holders_client: HoldersClient::new(&config.apis.holders)?,
            llm_client,
        })
    }

    /// Run the full pipeline for one caller input
    pub async fn analyze(&self, input: &str) -> AnalyzeResult<Report> {
        let started = Instant::now();

        // Stage 1: classify input, scraping the launchpad page if needed
        let (candidate, description) = self.resolve_input(input).await?;

        logger::info(
            LogTag::Analyzer,
            &format!(
                "Analyzing {} on {}",
                candidate.address,
                candidate.chain.chain_id()
            ),
        );

        // Stage 2: market data (hard failure aborts the request)
        let snapshot = self
            .market_client
            .best_market_snapshot(candidate.chain.chain_id(), &candidate.address)
            .await?;

        // Stage 3: holder count, best-effort and chain-gated
        let holders = match candidate.chain {
            ChainGuess::Solana => {
                self.holders_client
                    .fetch_holder_count(&candidate.address)
                    .await
            }
            ChainGuess::Ethereum => None,
        };

        let facts = TokenFacts::from_market(
            candidate.address.clone(),
            snapshot,
            holders,
            description,
        );

        // Stage 4: risk narrative, degrades instead of failing
        let brief = risk::generate_risk_brief(
            self.llm_client.as_ref(),
            &self.config.apis.llm,
            &facts,
        )
        .await;

        // Stage 5: assemble the report
        let summary = report::render_summary(&facts, &self.config.analyzer.persona_name);

        logger::info(
            LogTag::Analyzer,
            &format!(
                "Report for {} ready in {}ms (risk: {})",
                facts.address,
                started.elapsed().as_millis(),
                brief.level
            ),
        );

        Ok(Report {
            summary,
            risk: brief,
            facts,
        })
    }

    /// Classify the input, fetching and scraping a launchpad page when
    /// the input is a URL
    async fn resolve_input(
        &self,
        input: &str,
    ) -> AnalyzeResult<(AddressCandidate, Option<String>)> {
        match resolver::classify_input(input, &self.config.analyzer)? {
            ResolvedInput::Address(candidate) => Ok((candidate, None)),
            ResolvedInput::LaunchpadPage(url) => {
                let page = self
                    .page_resolver
                    .scrape(&url, &self.config.analyzer)
                    .await?;
                Ok((page.candidate, page.description))
            }
        }
    }
}
