//! Deterministic fixture-backed generation backend.

use async_trait::async_trait;

use super::fixtures;
use super::{Generator, GeneratorError, SummaryLimits};
use crate::types::{
    CompiledSummaries, ContentBrief, ContentCreation, ContentStrategy, ContentStrategyInput,
    MarketAnalysis, MarketingStrategy, ProjectBrief,
};

/// Canned backend: fixed corpus for the analysis/strategy stages, template
/// expansion for the content stage.
///
/// The content stage cannot be a pure literal because its output contract is
/// relative to its input (applied angles must come from the brief, mandatory
/// inclusions must survive verbatim), so the package is derived from the
/// request instead. The derivation is still fully deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedGenerator;

impl CannedGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Number of creative angles woven into the finished artifact.
    const APPLIED_ANGLE_COUNT: usize = 2;

    fn build_brief(market: &ProjectBrief, strategy: &ContentStrategyInput) -> ContentBrief {
        let channel_guidance = market
            .channels()
            .into_iter()
            .map(|channel| {
                let guidance = fixtures::channel_guidance(&channel);
                (channel, guidance)
            })
            .collect();

        let mut recommended_formats = vec![strategy.requested_format.clone()];
        for format in fixtures::content_strategy().recommended_formats {
            if format != strategy.requested_format {
                recommended_formats.push(format);
            }
        }

        ContentBrief {
            title: format!(
                "{}: {} for {}",
                market.project_title, strategy.requested_format, market.target_audience
            ),
            core_message: strategy.core_message.clone(),
            creative_angles: strategy.strategic_angles.clone(),
            content_goals: strategy.content_goals.clone(),
            audience_profile: format!(
                "{}. Motivated by: {}",
                market.target_audience,
                strategy.audience_motivations.join("; ")
            ),
            mandatory_inclusions: strategy.key_messages.clone(),
            recommended_formats,
            channel_guidance,
            tone_of_voice: strategy.tone_of_voice.clone(),
            constraints: fixtures::content_constraints(),
        }
    }

    fn build_content(brief: &ContentBrief, requested_format: &str) -> ContentCreation {
        let applied_angles: Vec<String> = brief
            .creative_angles
            .iter()
            .take(Self::APPLIED_ANGLE_COUNT)
            .cloned()
            .collect();

        let mut body = String::new();
        body.push_str(&format!("Subject: {}\n\n", brief.core_message));
        body.push_str(&format!("To: {}\n\n", brief.audience_profile));
        for angle in &applied_angles {
            body.push_str(&format!("{angle}\n\n"));
        }
        for (category, phrases) in &brief.mandatory_inclusions {
            body.push_str(&format!("[{category}]\n"));
            for phrase in phrases {
                body.push_str(&format!("- {phrase}\n"));
            }
            body.push('\n');
        }
        if let Some(goal) = brief.content_goals.first() {
            body.push_str(&format!("Next step: {goal}\n\n"));
        }
        body.push_str(&format!("Tone: {}", brief.tone_of_voice));

        ContentCreation {
            final_content: body,
            applied_angles,
            key_inclusions: brief.mandatory_inclusions.clone(),
            tone_of_voice: brief.tone_of_voice.clone(),
            format: requested_format.to_string(),
        }
    }
}

#[async_trait]
impl Generator for CannedGenerator {
    async fn market_analysis(
        &self,
        _brief: &ProjectBrief,
    ) -> Result<MarketAnalysis, GeneratorError> {
        Ok(fixtures::market_analysis())
    }

    async fn research_summaries(
        &self,
        brief: &ProjectBrief,
        limits: SummaryLimits,
    ) -> Result<CompiledSummaries, GeneratorError> {
        Ok(limits.apply(fixtures::research_summaries(brief)))
    }

    async fn marketing_strategy(
        &self,
        _brief: &ProjectBrief,
        _analysis: &MarketAnalysis,
    ) -> Result<MarketingStrategy, GeneratorError> {
        Ok(fixtures::marketing_strategy())
    }

    async fn content_strategy(
        &self,
        _brief: &ProjectBrief,
        _strategy: &MarketingStrategy,
    ) -> Result<ContentStrategy, GeneratorError> {
        Ok(fixtures::content_strategy())
    }

    async fn content_package(
        &self,
        market: &ProjectBrief,
        strategy: &ContentStrategyInput,
    ) -> Result<(ContentBrief, ContentCreation), GeneratorError> {
        let brief = Self::build_brief(market, strategy);
        let content = Self::build_content(&brief, &strategy.requested_format);
        Ok((brief, content))
    }

    fn backend_name(&self) -> &'static str {
        "canned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::validate_content_package;
    use std::collections::BTreeMap;

    fn market() -> ProjectBrief {
        ProjectBrief {
            project_title: "CloudFlow Q3".to_string(),
            product_or_service: "CloudFlow".to_string(),
            business_description: "AI workflow SaaS".to_string(),
            marketing_channels: "LinkedIn, Webinars".to_string(),
            target_audience: "mid-sized tech companies".to_string(),
            primary_goal: "signups".to_string(),
        }
    }

    fn strategy_input() -> ContentStrategyInput {
        let mut key_messages = BTreeMap::new();
        key_messages.insert(
            "value_prop".to_string(),
            vec!["Fix friction points others miss.".to_string()],
        );
        key_messages.insert(
            "proof_points".to_string(),
            vec!["10x more accurate insights than surveys.".to_string()],
        );
        ContentStrategyInput {
            core_message: "Unlock peak team performance.".to_string(),
            content_goals: vec!["Drive trial signups.".to_string()],
            audience_motivations: vec!["Reduce workflow friction.".to_string()],
            strategic_angles: vec![
                "The hidden cost of inefficient workflows.".to_string(),
                "Beyond surveys: behavioral truth.".to_string(),
                "Zero-disruption integration.".to_string(),
            ],
            key_messages,
            tone_of_voice: "confident, plain-spoken".to_string(),
            requested_format: "Email".to_string(),
        }
    }

    #[tokio::test]
    async fn test_package_satisfies_completeness_contract() {
        let (brief, content) = CannedGenerator::new()
            .content_package(&market(), &strategy_input())
            .await
            .unwrap();
        validate_content_package(&brief, &content).unwrap();
    }

    #[tokio::test]
    async fn test_applied_angles_are_leading_subset() {
        let (brief, content) = CannedGenerator::new()
            .content_package(&market(), &strategy_input())
            .await
            .unwrap();
        assert_eq!(content.applied_angles, brief.creative_angles[..2].to_vec());
    }

    #[tokio::test]
    async fn test_final_content_carries_every_mandatory_phrase() {
        let (_, content) = CannedGenerator::new()
            .content_package(&market(), &strategy_input())
            .await
            .unwrap();
        for phrases in content.key_inclusions.values() {
            for phrase in phrases {
                assert!(
                    content.final_content.contains(phrase),
                    "missing phrase: {phrase}"
                );
            }
        }
    }

    #[tokio::test]
    async fn test_requested_format_is_echoed_and_ranked_first() {
        let mut input = strategy_input();
        input.requested_format = "Blog Posts".to_string();
        let (brief, content) = CannedGenerator::new()
            .content_package(&market(), &input)
            .await
            .unwrap();
        assert_eq!(content.format, "Blog Posts");
        assert_eq!(brief.recommended_formats[0], "Blog Posts");
        // No duplicate of the requested format further down the list.
        assert_eq!(
            brief
                .recommended_formats
                .iter()
                .filter(|f| *f == "Blog Posts")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_channel_guidance_follows_brief_channels() {
        let (brief, _) = CannedGenerator::new()
            .content_package(&market(), &strategy_input())
            .await
            .unwrap();
        assert!(brief.channel_guidance.contains_key("LinkedIn"));
        assert!(brief.channel_guidance.contains_key("Webinars"));
    }

    #[tokio::test]
    async fn test_generation_is_deterministic() {
        let generator = CannedGenerator::new();
        let a = generator.market_analysis(&market()).await.unwrap();
        let b = generator.market_analysis(&market()).await.unwrap();
        assert_eq!(a, b);

        let s1 = generator
            .research_summaries(&market(), SummaryLimits::default())
            .await
            .unwrap();
        let s2 = generator
            .research_summaries(&market(), SummaryLimits::default())
            .await
            .unwrap();
        assert_eq!(s1, s2);
    }
}
