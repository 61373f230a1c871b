//! Bundled sample articles shown when no news source is configured or before
//! the first fetch completes.

use super::types::{Article, Category, Language};

struct Sample {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    content: &'static str,
    author: &'static str,
    source: &'static str,
    url: &'static str,
    published_at: &'static str,
    category: Category,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "1",
        title: "AI Model Learns to Predict Protein Folding in Seconds",
        description: "Researchers unveil a model that maps protein structures orders of magnitude faster than earlier methods.",
        content: "A team of computational biologists has released a model that predicts the three-dimensional structure of proteins in seconds. \
                  The work could shorten early-stage drug discovery, where structure prediction has long been a bottleneck.\n\n\
                  The authors caution that predictions still need laboratory validation, particularly for proteins that change shape when binding to other molecules.",
        author: "Priya Raman",
        source: "Tech Daily",
        url: "https://news.example.com/tech/ai-protein-folding",
        published_at: "2024-05-14T08:30:00Z",
        category: Category::Technology,
    },
    Sample {
        id: "2",
        title: "Underdogs Clinch Title in Dramatic Final",
        description: "A stoppage-time winner seals the championship after a season nobody predicted.",
        content: "The final whistle set off celebrations across the city as the league's lowest-budget club lifted the trophy. \
                  A header in the ninety-third minute decided a match that had swung back and forth all evening.\n\n\
                  The coach credited a squad rotation policy that kept key players fresh through a congested spring schedule.",
        author: "Marco Silva",
        source: "Sports Central",
        url: "https://news.example.com/sports/underdogs-title",
        published_at: "2024-05-13T21:45:00Z",
        category: Category::Sports,
    },
    Sample {
        id: "3",
        title: "Central Bank Holds Rates Steady Amid Cooling Inflation",
        description: "Policymakers signal patience as price growth edges toward target.",
        content: "The central bank left its benchmark rate unchanged for a fourth consecutive meeting. \
                  Officials pointed to slowing services inflation but warned that wage growth remains elevated.\n\n\
                  Markets now price in a first cut before the end of the year.",
        author: "Hannah Weber",
        source: "Business Wire Today",
        url: "https://news.example.com/business/rates-steady",
        published_at: "2024-05-13T14:00:00Z",
        category: Category::Business,
    },
    Sample {
        id: "4",
        title: "Streaming Hit Renewed for Two More Seasons",
        description: "The sci-fi drama becomes the platform's most-watched original series.",
        content: "Following record viewing figures, the streaming service has renewed its flagship science-fiction drama for two further seasons. \
                  Production on the next season begins this autumn.\n\n\
                  The show's creators said the story was always planned as a four-season arc.",
        author: "Lena Park",
        source: "Screen Report",
        url: "https://news.example.com/entertainment/streaming-renewal",
        published_at: "2024-05-12T17:20:00Z",
        category: Category::Entertainment,
    },
    Sample {
        id: "5",
        title: "Short Daily Walks Linked to Lower Heart Risk",
        description: "A large study finds that even 20 minutes of walking a day makes a measurable difference.",
        content: "A ten-year study following more than 80,000 adults found that a daily walk of around 20 minutes was associated with a significantly lower risk of heart disease. \
                  The benefit held across age groups.\n\n\
                  Researchers stressed that the findings show association rather than causation.",
        author: "Dr. Amina Yusuf",
        source: "Health Matters",
        url: "https://news.example.com/health/daily-walks",
        published_at: "2024-05-12T09:10:00Z",
        category: Category::Health,
    },
    Sample {
        id: "6",
        title: "Telescope Captures Sharpest Image Yet of Distant Galaxy",
        description: "New observations reveal star-forming regions in unprecedented detail.",
        content: "Astronomers have published an image of a galaxy more than ten billion light-years away, resolving individual star-forming clumps for the first time. \
                  The observation relied on gravitational lensing by a foreground cluster.\n\n\
                  The data will help refine models of how early galaxies assembled their mass.",
        author: "Tomás Herrera",
        source: "Science Now",
        url: "https://news.example.com/science/distant-galaxy",
        published_at: "2024-05-11T19:00:00Z",
        category: Category::Science,
    },
    Sample {
        id: "7",
        title: "Parliament Passes Landmark Data Privacy Bill",
        description: "The new law gives citizens the right to know how their personal data is used.",
        content: "After months of debate, lawmakers approved a sweeping data-protection bill by a wide margin. \
                  Companies will have eighteen months to comply with the new disclosure and consent rules.\n\n\
                  Civil-liberties groups welcomed the vote but said enforcement funding remains unclear.",
        author: "Claire Dubois",
        source: "Capitol Herald",
        url: "https://news.example.com/politics/privacy-bill",
        published_at: "2024-05-11T12:30:00Z",
        category: Category::Politics,
    },
    Sample {
        id: "8",
        title: "City Opens Its Largest Public Library",
        description: "The new library doubles as a community hub with study spaces and a maker lab.",
        content: "The city's new central library opened its doors this weekend, drawing thousands of visitors on its first day. \
                  Beyond books, the building houses recording studios, a maker lab and free co-working space.\n\n\
                  Officials hope it will become a model for future civic buildings.",
        author: "Sam Okafor",
        source: "Metro News",
        url: "https://news.example.com/general/new-library",
        published_at: "2024-05-10T10:00:00Z",
        category: Category::General,
    },
];

/// Build the fallback article list in display order.
pub fn fallback_articles() -> Vec<Article> {
    SAMPLES
        .iter()
        .map(|s| Article {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            content: s.content.to_string(),
            author: s.author.to_string(),
            source: s.source.to_string(),
            url: s.url.to_string(),
            image_url: format!("https://picsum.photos/seed/nexara{}/800/600", s.id),
            published_at: s.published_at.to_string(),
            category: s.category.as_str().to_string(),
            language: Language::English,
        })
        .collect()
}
