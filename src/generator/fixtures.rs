//! Canned generation corpus
//!
//! Fixed outputs for each pipeline stage, used by [`super::CannedGenerator`]
//! until a model-backed backend replaces it. The corpus describes one worked
//! engagement (an AI workflow-optimization SaaS) so that composed responses
//! stay internally consistent across stages: the strategy references the
//! analysis's competitors, the content strategy carries the strategy's
//! messaging, and so on.
//!
//! Research queries interpolate fields from the caller's brief; everything
//! else is literal. Nothing here reads a clock or a RNG, so a given request
//! always produces the same bytes.

use std::collections::BTreeMap;

use crate::types::{
    Competitor, CompiledSummaries, ContentStrategy, MarketAnalysis, MarketTrend,
    MarketingStrategy, Opportunity, ProjectBrief, SourceSummary,
};

fn svec(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn smap(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, values)| ((*key).to_string(), svec(values)))
        .collect()
}

/// Canned competitive/market snapshot.
pub fn market_analysis() -> MarketAnalysis {
    MarketAnalysis {
        executive_summary: "CloudFlow, an AI-driven SaaS tool focused on workflow optimization \
            for mid-sized tech companies, faces a market with competitors exhibiting weaknesses \
            in customization, integration, and pricing transparency. Key opportunities lie in \
            offering seamless integrations, transparent pricing, and robust AI-driven insights."
            .to_string(),
        competitors: vec![
            Competitor {
                name: "Kissflow".to_string(),
                strength: "Low-code/no-code approach".to_string(),
                weakness: "Limited customization and integration issues.".to_string(),
            },
            Competitor {
                name: "Nintex".to_string(),
                strength: "Widely adopted".to_string(),
                weakness: "High cost and steep learning curve.".to_string(),
            },
            Competitor {
                name: "VegamAI".to_string(),
                strength: "No-code workflow designer".to_string(),
                weakness: "Limited market presence.".to_string(),
            },
        ],
        market_trends: vec![
            MarketTrend {
                trend: "AI & ML in workflow automation".to_string(),
                velocity: "accelerating".to_string(),
            },
            MarketTrend {
                trend: "Demand for no-code/low-code tools".to_string(),
                velocity: "stable".to_string(),
            },
            MarketTrend {
                trend: "Seamless system integrations".to_string(),
                velocity: "accelerating".to_string(),
            },
            MarketTrend {
                trend: "Transparent SaaS pricing".to_string(),
                velocity: "accelerating".to_string(),
            },
        ],
        audience_insights: svec(&[
            "Tech teams struggle with siloed strategies and inefficient tools.",
            "Resistance to change slows adoption of workflow automation.",
            "High concern around data privacy & compliance.",
            "Integration problems reduce productivity and increase manual work.",
        ]),
        pricing_models: svec(&[
            "Tiered pricing",
            "Per-user pricing",
            "Usage-based add-ons",
            "Hybrid subscription + usage model",
        ]),
        opportunities: vec![
            Opportunity {
                opportunity: "Provide advanced customization for complex workflows".to_string(),
                impact_score: 0.9,
                confidence: 0.9,
            },
            Opportunity {
                opportunity: "Offer seamless integrations with third-party tools".to_string(),
                impact_score: 0.85,
                confidence: 0.9,
            },
            Opportunity {
                opportunity: "Transparent scalable pricing".to_string(),
                impact_score: 0.8,
                confidence: 0.85,
            },
            Opportunity {
                opportunity: "Improve user onboarding & reduce learning curve".to_string(),
                impact_score: 0.75,
                confidence: 0.8,
            },
            Opportunity {
                opportunity: "Use AI to automate tasks & deliver insights".to_string(),
                impact_score: 0.8,
                confidence: 0.75,
            },
            Opportunity {
                opportunity: "Adopt alternative data collection beyond surveys".to_string(),
                impact_score: 0.85,
                confidence: 0.8,
            },
        ],
        sources: svec(&[
            "https://www.cloudeagle.ai/blogs/top-kissflow-alternatives-for-workflow-automation",
            "https://www.flowforma.com/blog/nintex-competitors-and-alternatives",
            "https://multishoring.com/blog/challenges-in-implementing-workflow-automation/",
            "https://www.vegam.ai/business-process-automation/tools-comparison",
            "https://www.zluri.com/blog/kissflow-alternatives",
            "https://whatfix.com/blog/digital-transformation-challenges/",
            "https://online.hbs.edu/blog/post/data-collection-methods",
            "https://www.moesif.com/blog/technical/api-development/SaaS-Pricing-Models/",
        ]),
    }
}

/// Canned per-query research digests.
///
/// Query strings interpolate the brief so the response reads as research run
/// for this engagement; URL digests are literal.
pub fn research_summaries(brief: &ProjectBrief) -> CompiledSummaries {
    let mut summaries = CompiledSummaries::new();

    summaries.insert(
        format!("{} competitors and alternatives", brief.product_or_service),
        [
            (
                "https://www.cloudeagle.ai/blogs/top-kissflow-alternatives-for-workflow-automation",
                SourceSummary {
                    relevance: 0.92,
                    impact_score: 0.85,
                    summary: "Roundup of Kissflow alternatives, scoring each on customization \
                        depth and integration coverage."
                        .to_string(),
                    key_points: svec(&[
                        "Kissflow's low-code approach trades away customization depth.",
                        "Integration gaps are the most cited reason for switching.",
                    ]),
                    strategic_insights: svec(&[
                        "Position against incumbents on customization and integrations.",
                    ]),
                },
            ),
            (
                "https://www.flowforma.com/blog/nintex-competitors-and-alternatives",
                SourceSummary {
                    relevance: 0.88,
                    impact_score: 0.8,
                    summary: "Comparison of Nintex against lighter-weight challengers on cost \
                        and time-to-value."
                        .to_string(),
                    key_points: svec(&[
                        "Nintex adoption stalls on licensing cost and learning curve.",
                        "Challengers win mid-market deals on onboarding speed.",
                    ]),
                    strategic_insights: svec(&[
                        "Mid-market buyers are price- and onboarding-sensitive.",
                    ]),
                },
            ),
            (
                "https://www.zluri.com/blog/kissflow-alternatives",
                SourceSummary {
                    relevance: 0.81,
                    impact_score: 0.7,
                    summary: "Buyer-oriented listicle ranking workflow tools by feature breadth."
                        .to_string(),
                    key_points: svec(&[
                        "Feature checklists dominate early-stage vendor shortlists.",
                    ]),
                    strategic_insights: svec(&[
                        "Comparison-page SEO is a viable acquisition channel.",
                    ]),
                },
            ),
        ]
        .into_iter()
        .map(|(url, digest)| (url.to_string(), digest))
        .collect(),
    );

    summaries.insert(
        format!("{} pricing models", brief.product_or_service),
        [
            (
                "https://www.moesif.com/blog/technical/api-development/SaaS-Pricing-Models/",
                SourceSummary {
                    relevance: 0.9,
                    impact_score: 0.75,
                    summary: "Survey of SaaS pricing structures: tiered, per-user, usage-based, \
                        and hybrid models."
                        .to_string(),
                    key_points: svec(&[
                        "Hybrid subscription + usage pricing is gaining share.",
                        "Opaque pricing correlates with higher churn in SMB segments.",
                    ]),
                    strategic_insights: svec(&[
                        "Publish transparent pricing tiers as a differentiator.",
                    ]),
                },
            ),
            (
                "https://www.vegam.ai/business-process-automation/tools-comparison",
                SourceSummary {
                    relevance: 0.77,
                    impact_score: 0.65,
                    summary: "Vendor comparison matrix covering automation depth and list prices."
                        .to_string(),
                    key_points: svec(&[
                        "List prices vary 4x across comparable automation suites.",
                    ]),
                    strategic_insights: svec(&[
                        "Anchor pricing against the high end of the incumbent range.",
                    ]),
                },
            ),
        ]
        .into_iter()
        .map(|(url, digest)| (url.to_string(), digest))
        .collect(),
    );

    summaries.insert(
        format!("{} adoption challenges", brief.target_audience),
        [
            (
                "https://multishoring.com/blog/challenges-in-implementing-workflow-automation/",
                SourceSummary {
                    relevance: 0.86,
                    impact_score: 0.8,
                    summary: "Field report on why workflow-automation rollouts stall inside \
                        mid-sized organizations."
                        .to_string(),
                    key_points: svec(&[
                        "Change resistance and unclear ownership stall rollouts.",
                        "Integration with legacy systems is the top technical blocker.",
                    ]),
                    strategic_insights: svec(&[
                        "Lead messaging with low-disruption adoption stories.",
                    ]),
                },
            ),
            (
                "https://whatfix.com/blog/digital-transformation-challenges/",
                SourceSummary {
                    relevance: 0.74,
                    impact_score: 0.6,
                    summary: "Overview of digital-transformation failure modes across functions."
                        .to_string(),
                    key_points: svec(&[
                        "Training debt compounds when tools change faster than teams.",
                    ]),
                    strategic_insights: svec(&[
                        "Bundle enablement content with the product pitch.",
                    ]),
                },
            ),
            (
                "https://online.hbs.edu/blog/post/data-collection-methods",
                SourceSummary {
                    relevance: 0.68,
                    impact_score: 0.55,
                    summary: "Primer on data-collection methods and the limits of survey-based \
                        measurement."
                        .to_string(),
                    key_points: svec(&[
                        "Surveys under-report behavioral friction by design.",
                    ]),
                    strategic_insights: svec(&[
                        "Contrast behavioral telemetry with survey-based competitors.",
                    ]),
                },
            ),
        ]
        .into_iter()
        .map(|(url, digest)| (url.to_string(), digest))
        .collect(),
    );

    summaries
}

/// Canned strategic direction, written against the canned market analysis.
pub fn marketing_strategy() -> MarketingStrategy {
    MarketingStrategy {
        diagnosis: "Mid-sized tech companies lose measurable throughput to fragmented workflow \
            tooling, yet the incumbent suites are either too rigid in customization, too costly \
            to adopt, or too shallow in integrations to close the gap. Buyers are primed for \
            AI-driven optimization but skeptical after integration-heavy rollouts."
            .to_string(),
        strategic_direction: "Position CloudFlow as the AI-native workflow optimization layer \
            for mid-sized tech companies: transparent pricing, integration-first onboarding, \
            and behavioral insights that survey-based tools cannot produce."
            .to_string(),
        strategy_pillars: svec(&[
            "AI-driven insight accuracy as the headline differentiator.",
            "Integration-first adoption with minimal workflow disruption.",
            "Transparent, scalable pricing that grows with the team.",
            "Privacy and compliance as a first-class commitment.",
        ]),
        messaging_framework: smap(&[
            (
                "value_proposition",
                &[
                    "Unlock peak team performance with AI-powered workflow automation.",
                    "Fix the friction points legacy tools miss.",
                ],
            ),
            (
                "differentiation",
                &[
                    "Real-time behavioral analysis instead of stale survey data.",
                    "Advanced customization where Kissflow and Nintex hit their ceilings.",
                ],
            ),
            (
                "trust",
                &[
                    "Security and compliance built into the analysis pipeline.",
                    "Transparent pricing with no per-seat surprises.",
                ],
            ),
        ]),
        go_to_market_plan: smap(&[
            (
                "phase_1_awareness",
                &[
                    "Launch a LinkedIn thought-leadership series on AI-driven workflow optimization.",
                    "Publish competitor comparison pages targeting Kissflow and Nintex switchers.",
                ],
            ),
            (
                "phase_2_consideration",
                &[
                    "Run live product demos and webinars with integration walk-throughs.",
                    "Ship an interactive ROI calculator quantifying workflow friction costs.",
                ],
            ),
            (
                "phase_3_conversion",
                &[
                    "Introduce a freemium tier to de-risk first adoption.",
                    "Target trial users with an onboarding email sequence tied to activation milestones.",
                ],
            ),
        ]),
        priorities: svec(&[
            "Stand up competitor comparison content.",
            "Launch the freemium tier and activation email sequence.",
            "Build the integration marketplace page.",
            "Publish security and compliance documentation.",
        ]),
    }
}

/// Canned content plan, written against the canned marketing strategy.
pub fn content_strategy() -> ContentStrategy {
    ContentStrategy {
        core_message: "CloudFlow unlocks peak team performance in mid-sized tech companies by \
            providing uniquely accurate, AI-powered insights and customizable automation that \
            legacy tools miss."
            .to_string(),
        content_goals: svec(&[
            "Generate awareness of CloudFlow's unique AI-driven approach to workflow optimization.",
            "Build trust by demonstrating the accuracy and reliability of CloudFlow's insights.",
            "Drive engagement through interactive demos and valuable content showcasing workflow improvements.",
            "Educate the audience on the benefits of real-time behavioral data analysis vs. traditional surveys.",
            "Facilitate sign-ups and conversions through a freemium model and targeted content.",
            "Address data privacy concerns by highlighting security and compliance measures.",
        ]),
        audience_motivations: svec(&[
            "Increase team efficiency and productivity.",
            "Reduce workflow bottlenecks and friction.",
            "Improve data-driven decision-making.",
            "Find affordable and scalable solutions.",
            "Seamlessly integrate new tools with existing systems.",
            "Ensure data privacy and security.",
        ]),
        strategic_angles: svec(&[
            "The Hidden Costs of Inefficient Workflows: Quantify the financial impact of workflow \
             bottlenecks and highlight how CloudFlow provides a clear ROI.",
            "Beyond Surveys: Uncover the Truth About Your Team's Workflow: Focus on the limitations \
             of traditional survey data and the superiority of real-time behavioral analysis.",
            "AI-Powered Workflow Automation for Mid-Sized Tech: Tailor the message to the unique \
             challenges and opportunities of mid-sized tech companies, emphasizing scalability and \
             customization.",
            "Seamless Integration, Zero Disruption: Showcase the ease of integrating CloudFlow with \
             existing tools and the minimal disruption to existing workflows.",
            "From Insight to Action: Real-World Workflow Transformations: Present case studies and \
             examples of how CloudFlow has helped companies like theirs achieve tangible results.",
        ]),
        recommended_formats: svec(&[
            "Webinars",
            "Case Studies",
            "Blog Posts",
            "Infographics",
            "Product Demos",
            "Whitepapers",
            "LinkedIn Articles",
            "Short Videos",
        ]),
        channel_playbook: smap(&[
            (
                "LinkedIn",
                &[
                    "Targeted ads to HR, operations, and tech decision-makers in mid-sized tech companies.",
                    "Share valuable content and thought leadership articles on AI-driven workflow automation.",
                    "Run sponsored content highlighting customer success stories and product demos.",
                ],
            ),
            (
                "SaaS Blogs and Publications",
                &[
                    "Publish guest posts and articles on workflow optimization and the benefits of AI.",
                    "Participate in industry discussions and forums.",
                    "Secure product reviews and comparisons.",
                ],
            ),
            (
                "Webinars and Online Events",
                &[
                    "Host webinars showcasing AI-driven workflow automation.",
                    "Offer interactive product demos and Q&A sessions.",
                    "Partner with industry experts and thought leaders.",
                ],
            ),
            (
                "Partnerships with SaaS Providers",
                &[
                    "Co-market CloudFlow with complementary SaaS tools.",
                    "Offer bundled solutions and integrated workflows.",
                    "Cross-promote each other's products to relevant customer segments.",
                ],
            ),
        ]),
        mandatory_inclusions: smap(&[
            (
                "value_prop",
                &[
                    "CloudFlow: Unlock peak team performance with AI-powered workflow automation. \
                     Get 10x more accurate insights and fix friction points others miss.",
                ],
            ),
            (
                "key_messages",
                &[
                    "Eliminate workflow bottlenecks with AI-driven insights tailored to your team's actual behavior.",
                    "Seamlessly integrate with your existing tools and customize workflows to fit your unique needs.",
                    "Gain clear, predictable value with our transparent and scalable pricing plans.",
                    "Address data privacy concerns with our secure and compliant AI-driven workflow analysis.",
                ],
            ),
            (
                "proof_points",
                &[
                    "AI-powered analysis of real-time behavioral data, providing 10x more accurate \
                     insights compared to traditional surveys.",
                    "Advanced customization options to handle complex workflows, differentiating \
                     from competitors with limited customization.",
                    "Seamless integration with a wide array of third-party applications, avoiding \
                     integration challenges faced by competitors.",
                    "Transparent and scalable pricing plans to address concerns about rising costs \
                     as organizations grow.",
                ],
            ),
        ]),
    }
}

/// Fixed production constraints attached to every content brief.
pub fn content_constraints() -> Vec<String> {
    svec(&[
        "Do not name competitors in paid placements.",
        "Every claim about accuracy must be attributable to a published proof point.",
        "Keep reading level accessible; avoid internal jargon.",
    ])
}

/// Per-channel adaptation guidance for a content brief.
pub fn channel_guidance(channel: &str) -> Vec<String> {
    vec![
        format!("Adapt the lead paragraph to how {channel} surfaces previews."),
        format!("Close with a call to action appropriate for {channel}."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::validate_summaries;

    fn brief() -> ProjectBrief {
        ProjectBrief {
            project_title: "CloudFlow Q3".to_string(),
            product_or_service: "CloudFlow".to_string(),
            business_description: "AI workflow SaaS".to_string(),
            marketing_channels: "LinkedIn, Webinars".to_string(),
            target_audience: "mid-sized tech companies".to_string(),
            primary_goal: "signups".to_string(),
        }
    }

    #[test]
    fn test_market_analysis_fixture_is_valid() {
        let analysis = market_analysis();
        analysis.validate().unwrap();
        assert!(!analysis.executive_summary.is_empty());
        assert!(!analysis.competitors.is_empty());
    }

    #[test]
    fn test_research_summaries_fixture_is_valid() {
        let summaries = research_summaries(&brief());
        validate_summaries(&summaries).unwrap();
        assert_eq!(summaries.len(), 3);
    }

    #[test]
    fn test_research_queries_interpolate_brief() {
        let summaries = research_summaries(&brief());
        assert!(summaries
            .keys()
            .any(|q| q == "CloudFlow competitors and alternatives"));
    }

    #[test]
    fn test_strategy_fixtures_are_valid() {
        marketing_strategy().validate().unwrap();
        content_strategy().validate().unwrap();
    }
}
