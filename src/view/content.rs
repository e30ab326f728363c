//! Static narrative pages.

use super::{Block, Bullet};

fn bullets(items: &[(&str, &str)]) -> Block {
    Block::Bullets {
        items: items
            .iter()
            .map(|(label, text)| Bullet {
                label: label.to_string(),
                text: text.to_string(),
            })
            .collect(),
    }
}

pub fn welcome() -> Vec<Block> {
    vec![
        Block::heading(2, "Purpose"),
        Block::paragraph(
            "This dashboard gives a view of global imports and exports data to support \
             strategic decisions with detail on trade volumes, product categories, shipping \
             methods, and financial impact.",
        ),
        Block::heading(2, "Key Features"),
        bullets(&[
            ("Data Preview", "Filter and explore the raw data directly."),
            (
                "Analysis Dashboard",
                "Visualize trends and patterns in global trade with interactive charts.",
            ),
            (
                "Key Observations and Insights",
                "Summarize the most important findings and managerial insights to guide strategic actions.",
            ),
        ]),
    ]
}

pub fn insights() -> Vec<Block> {
    vec![
        Block::heading(1, "Summary of Key Findings"),
        bullets(&[
            (
                "Top Countries",
                "The countries with the highest import/export volumes are critical players and \
                 candidates for strategic partnerships.",
            ),
            (
                "Shipping Methods",
                "The most frequently used shipping method shows a preference that logistics \
                 operations can be streamlined around.",
            ),
            (
                "Category Impact",
                "The categories with the highest economic impact, such as Clothing and Furniture, \
                 should lead marketing and inventory planning.",
            ),
            (
                "Product and Payment Terms Preferences",
                "Prepaid and cash-on-delivery are popular payment terms across categories; \
                 incentives for prepaid payment could improve cash flow.",
            ),
        ]),
        Block::heading(1, "Managerial Insights"),
        bullets(&[
            (
                "Strategic Partnerships",
                "Relationships with the top trading countries can yield better routes and pricing.",
            ),
            (
                "Operational Focus on Top Shipping Method",
                "Optimizing the most used shipping method shortens turnaround times.",
            ),
            (
                "Targeted Marketing",
                "High-impact categories should be prioritized for targeted campaigns.",
            ),
            (
                "Financial Strategy",
                "Discounts on prepaid orders improve liquidity; cash-on-delivery trends inform \
                 risk management.",
            ),
            (
                "Resource Allocation",
                "Category preferences show where inventory and workforce should be focused.",
            ),
        ]),
        Block::heading(1, "Recommendations"),
        bullets(&[
            (
                "Enhance Shipping Capabilities",
                "Strengthen the most utilized methods (for example Air and Sea) for quality and timeliness.",
            ),
            (
                "Diversify Payment Options",
                "Digital wallets or buy-now-pay-later options could attract a broader customer base.",
            ),
            (
                "Regular Data Analysis",
                "Ongoing analysis of trade trends and shipping preferences keeps strategy aligned \
                 with demand.",
            ),
            (
                "Leverage Technology",
                "Automating frequent shipping workflows and inventory for top products improves efficiency.",
            ),
        ]),
        Block::heading(2, "Conclusion"),
        Block::paragraph(
            "Strategic partnerships, optimized shipping, focus on high-impact categories and \
             diverse payment options are the main levers for operational efficiency and market \
             reach. Continuous analysis keeps the business responsive to market changes.",
        ),
    ]
}
