use vidash_types::Comment;

pub fn for_video(video_id: &str) -> Vec<Comment> {
    match video_id {
        "vid-alpha" => vec![
            comment("c-alpha-1", "early_bird", "03 Jan 2025", "First!"),
            comment("c-alpha-2", "longtime_fan", "04 Jan 2025", "Best one yet."),
            comment("c-alpha-3", "casual_viewer", "05 Jan 2025", "Nice editing."),
        ],
        "vid-beta" => vec![comment(
            "c-beta-1",
            "critic",
            "12 Feb 2025",
            "Audio is a bit low.",
        )],
        _ => Vec::new(),
    }
}

fn comment(id: &str, name: &str, date: &str, content: &str) -> Comment {
    Comment {
        id: id.to_string(),
        name: name.to_string(),
        date: date.to_string(),
        content: content.to_string(),
        image_url: format!("https://img.mock/{name}.jpg"),
    }
}
