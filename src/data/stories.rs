//! Stories dataset and search

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Story {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
}

pub const STORIES: &[Story] = &[
    Story {
        id: 1,
        title: "The Art of Golden Hour",
        excerpt: "Discovering the magic that happens when the sun kisses the horizon...",
        content: "There's something magical about golden hour. That perfect moment when the sun dips low enough to paint everything in warm, golden light. I've spent countless hours chasing this light, learning that it's not just about the technical aspects of photography, but about being present in the moment. Each golden hour session teaches me something new about light, shadow, and the stories they tell together.",
        image: "assets/images/polaroids/story-1.jpg",
        date: "December 15, 2024",
        category: "Photography Tips",
        read_time: "3 min read",
        tags: &["golden hour", "lighting", "technique"],
    },
    Story {
        id: 2,
        title: "Behind the Wedding Day Chaos",
        excerpt: "What really happens in the moments between the posed shots...",
        content: "Weddings are beautiful chaos. While guests see the perfectly composed shots, I witness the raw emotion, the stolen glances, the spontaneous laughter. There's the bride's nervous excitement before walking down the aisle, the father's proud tears during the first dance, the way light filters through stained glass windows. These are the moments that remind me why I love photography - capturing authentic human connection.",
        image: "assets/images/polaroids/story-2.jpg",
        date: "November 28, 2024",
        category: "Wedding Stories",
        read_time: "5 min read",
        tags: &["weddings", "emotion", "behind-the-scenes"],
    },
    Story {
        id: 3,
        title: "Street Photography: Finding Stories in the Ordinary",
        excerpt: "How to capture compelling narratives from everyday life...",
        content: "Street photography is about finding poetry in the mundane. It's about recognizing that every person walking down the street has a story worth telling. The way a businessman checks his watch with urgency, how a child stops to examine a flower, the silent conversation between two strangers on a park bench. These are the stories I look for, the human moments that connect us all.",
        image: "assets/images/polaroids/story-3.jpg",
        date: "November 10, 2024",
        category: "Street Photography",
        read_time: "4 min read",
        tags: &["street", "narrative", "human connection"],
    },
    Story {
        id: 4,
        title: "The Journey to Film Photography",
        excerpt: "Why I fell in love with the magic of analog photography...",
        content: "Switching to film was like rediscovering photography. There's something magical about not knowing exactly what you've captured until the film is developed. Each shot becomes more intentional, more precious. The limitations of film teach you to see differently, to compose more carefully, to appreciate the craft. In a world of instant gratification, film photography reminds us that some things are worth waiting for.",
        image: "assets/images/polaroids/story-4.jpg",
        date: "October 22, 2024",
        category: "Film Photography",
        read_time: "6 min read",
        tags: &["film", "analog", "craftsmanship"],
    },
    Story {
        id: 5,
        title: "Portrait Sessions: Building Trust Through the Lens",
        excerpt: "The psychology of creating authentic portrait photography...",
        content: "Portrait photography is as much about psychology as it is about technique. Building trust with your subject is crucial. I spend time getting to know each person before we start shooting - learning their story, understanding what makes them comfortable. The best portraits happen when someone forgets the camera is there, when they're just being themselves. That's when the real magic happens.",
        image: "assets/images/polaroids/story-5.jpg",
        date: "October 5, 2024",
        category: "Portrait Photography",
        read_time: "4 min read",
        tags: &["portraits", "connection", "authenticity"],
    },
    Story {
        id: 6,
        title: "Travel Photography: Documenting the Soul of Places",
        excerpt: "How travel photography captures more than just landscapes...",
        content: "Travel photography isn't just about beautiful landscapes. It's about capturing the soul of a place, the way light falls on ancient stone walls, how locals interact with their environment, the colors that define a culture. Each destination teaches me to see with new eyes, to appreciate different perspectives. Whether it's the golden sands of Rajasthan or the misty mountains of Kashmir, every place has stories waiting to be told.",
        image: "assets/images/polaroids/story-6.jpg",
        date: "September 18, 2024",
        category: "Travel Photography",
        read_time: "5 min read",
        tags: &["travel", "culture", "storytelling"],
    },
];

pub fn story_by_id(id: u32) -> Option<&'static Story> {
    STORIES.iter().find(|s| s.id == id)
}

/// Case-insensitive search over title, excerpt, content and tags, optionally
/// narrowed to a category. Empty query matches everything.
pub fn search(query: &str, category: Option<&str>) -> Vec<&'static Story> {
    let query = query.to_lowercase();
    STORIES
        .iter()
        .filter(|story| {
            let matches_query = query.is_empty()
                || story.title.to_lowercase().contains(&query)
                || story.excerpt.to_lowercase().contains(&query)
                || story.content.to_lowercase().contains(&query)
                || story.tags.iter().any(|t| t.to_lowercase().contains(&query));
            let matches_category = match category {
                Some(cat) => story.category.eq_ignore_ascii_case(cat),
                None => true,
            };
            matches_query && matches_category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_six_stories() {
        assert_eq!(STORIES.len(), 6);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(story_by_id(2).map(|s| s.title), Some("Behind the Wedding Day Chaos"));
        assert!(story_by_id(99).is_none());
    }

    #[test]
    fn empty_query_matches_all() {
        assert_eq!(search("", None).len(), STORIES.len());
    }

    #[test]
    fn search_hits_tags_case_insensitively() {
        let hits = search("GOLDEN", None);
        assert!(hits.iter().any(|s| s.id == 1));
        // "golden sands of Rajasthan" in the travel story's content.
        assert!(hits.iter().any(|s| s.id == 6));
    }

    #[test]
    fn category_narrows_results() {
        let hits = search("", Some("wedding stories"));
        let ids: Vec<u32> = hits.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn query_and_category_combine() {
        assert!(search("film", Some("Wedding Stories")).is_empty());
        let hits = search("film", Some("Film Photography"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);
    }
}
