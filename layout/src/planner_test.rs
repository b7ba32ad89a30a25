use super::*;

fn post(id: &str, format: &str, dimensions: &str, brief: &str) -> ContentPost {
    ContentPost {
        post_id: id.to_owned(),
        content_format: Some(format.to_owned()),
        dimensions: Some(dimensions.to_owned()),
        visual_brief: Some(brief.to_owned()),
        ..ContentPost::default()
    }
}

fn content_frames(layout: &Layout) -> Vec<&PlacementInstruction> {
    layout.instructions.iter().filter(|i| !i.is_metadata_block()).collect()
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn default_config_uses_compact_constants() {
    let config = LayoutConfig::default();
    assert!((config.scale_factor - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.text_block_width, 380);
    assert_eq!(config.metadata_min_height, 400);
    assert_eq!(config.frame_start_x, 430);
    assert_eq!(config.frame_gap, 40);
    assert_eq!(config.post_gap, 120);
}

#[test]
fn scale_rounds_and_never_collapses() {
    let config = LayoutConfig::default();
    assert_eq!(config.scale(1080), 270);
    assert_eq!(config.scale(630), 158);
    assert_eq!(config.scale(1), 1);
    assert_eq!(config.with_scale_factor(1.0).scale(1080), 1080);
}

// =============================================================================
// PLACEMENT
// =============================================================================

#[test]
fn empty_input_plans_nothing() {
    let layout = plan(&[], &LayoutConfig::default());
    assert!(layout.instructions.is_empty());
    assert_eq!(layout.content_frames, 0);
    assert_eq!(layout.height, 0);
}

#[test]
fn single_square_post() {
    let posts = vec![post("P1", "Image", "1080x1080px", "")];
    let layout = plan_posts(&posts, &LayoutConfig::default());

    assert_eq!(layout.instructions.len(), 2);
    assert_eq!(layout.content_frames, 1);

    let meta = &layout.instructions[0];
    assert_eq!(meta.kind, PlacementKind::MetadataBlock);
    assert_eq!((meta.x, meta.y, meta.width, meta.height), (0, 0, 380, 400));
    assert_eq!(meta.name, "P1 — Info");

    let frame = &layout.instructions[1];
    assert_eq!((frame.x, frame.y, frame.width, frame.height), (430, 0, 270, 270));
    assert_eq!(frame.name, "P1 — Frame");
    assert_eq!(
        frame.kind,
        PlacementKind::ContentFrame { frame: FrameDefinition::fallback(), slide: 0 }
    );
}

#[test]
fn frames_advance_left_to_right() {
    let posts = vec![post("P2", "Static", "FB: 1200x630px | IG Story: 1080x1920px", "")];
    let layout = plan_posts(&posts, &LayoutConfig::default());
    let frames = content_frames(&layout);

    assert_eq!(frames.len(), 2);
    assert_eq!((frames[0].x, frames[0].width, frames[0].height), (430, 300, 158));
    assert_eq!((frames[1].x, frames[1].width, frames[1].height), (430 + 300 + 40, 270, 480));
    assert!(frames.iter().all(|f| f.y == 0));
    assert_eq!(frames[0].name, "P2 — FB");
    assert_eq!(frames[1].name, "P2 — IG Story");

    // Metadata block grows to the tallest frame.
    assert_eq!(layout.instructions[0].height, 480);
    assert_eq!(layout.height, 480 + 120);
}

#[test]
fn carousel_repeats_each_frame_per_slide() {
    let posts = vec![post("C1", "IG Carousel", "1080x1350px", "Slide 1: hook, Slide 2: detail, Slide 3: CTA")];
    let layout = plan_posts(&posts, &LayoutConfig::default());
    let frames = content_frames(&layout);

    assert_eq!(layout.content_frames, 3);
    let names: Vec<&str> = frames.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["C1 — Frame", "C1 — Frame (2)", "C1 — Frame (3)"]);
    let slides: Vec<u32> = frames
        .iter()
        .map(|f| match &f.kind {
            PlacementKind::ContentFrame { slide, .. } => *slide,
            PlacementKind::MetadataBlock => u32::MAX,
        })
        .collect();
    assert_eq!(slides, vec![0, 1, 2]);
    assert_eq!(frames[1].x - frames[0].x, 270 + 40);
}

#[test]
fn carousel_slides_follow_definition_order() {
    let posts = vec![post(
        "C2",
        "carousel",
        "1080x1080px (feed) or 1080x1920px (story)",
        "Slide 2 only",
    )];
    let layout = plan_posts(&posts, &LayoutConfig::default());
    let frames = content_frames(&layout);
    let names: Vec<&str> = frames.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["C2 — feed", "C2 — feed (2)", "C2 — story", "C2 — story (2)"]);
}

#[test]
fn carousel_without_slide_references_clamps_to_one() {
    let posts = vec![post("C3", "Carousel", "1080x1080px", "No numbered slides here")];
    let entry = PostFrames::from_post(&posts[0]);
    assert_eq!(entry.slide_count, 0);
    assert_eq!(entry.repeat_count(), 1);
    assert_eq!(plan_posts(&posts, &LayoutConfig::default()).content_frames, 1);
}

#[test]
fn non_carousel_ignores_slide_references() {
    let posts = vec![post("R1", "Reel", "1080x1920px", "Slide 1, Slide 2")];
    let entry = PostFrames::from_post(&posts[0]);
    assert_eq!(entry.slide_count, 2);
    assert_eq!(entry.repeat_count(), 1);
}

#[test]
fn posts_stack_with_strictly_increasing_y() {
    let posts: Vec<ContentPost> = (1..=5)
        .map(|n| post(&format!("P{n}"), "Image", "1080x1080px", ""))
        .collect();
    let layout = plan_posts(&posts, &LayoutConfig::default());

    let metas: Vec<&PlacementInstruction> = layout.instructions.iter().filter(|i| i.is_metadata_block()).collect();
    assert_eq!(metas.len(), 5);
    assert_eq!(layout.content_frames, 5);
    for pair in metas.windows(2) {
        assert!(pair[1].y > pair[0].y);
        assert_eq!(pair[1].y - pair[0].y, 400 + 120);
    }
}

#[test]
fn instructions_are_grouped_per_post() {
    let posts = vec![post("A", "Image", "1080x1080px", ""), post("B", "Image", "1x1px | 2x2px", "")];
    let layout = plan_posts(&posts, &LayoutConfig::default());

    let b: Vec<&PlacementInstruction> = layout.for_post(1).collect();
    assert_eq!(b.len(), 3);
    assert!(b[0].is_metadata_block());
    assert!(b.iter().all(|i| i.y == 520));
}

#[test]
fn blank_post_id_is_named_unknown() {
    let posts = vec![post("", "Image", "", "")];
    let layout = plan_posts(&posts, &LayoutConfig::default());
    assert_eq!(layout.instructions[0].name, "Unknown — Info");
    assert_eq!(layout.instructions[1].name, "Unknown — Frame");
}

#[test]
fn full_size_config_places_unscaled_frames() {
    let posts = vec![post("P1", "Image", "1080x1920px", "")];
    let layout = plan_posts(&posts, &LayoutConfig::default().with_scale_factor(1.0));
    let frame = &layout.instructions[1];
    assert_eq!((frame.width, frame.height), (1080, 1920));
    assert_eq!(layout.instructions[0].height, 1920);
    assert_eq!(layout.height, 1920 + 120);
}

#[test]
fn instructions_serialize_with_kebab_case_kinds() {
    let posts = vec![post("P1", "Image", "", "")];
    let layout = plan_posts(&posts, &LayoutConfig::default());
    let json = serde_json::to_value(&layout.instructions[0]).expect("serialize");
    assert_eq!(json["kind"]["type"], "metadata-block");
    let json = serde_json::to_value(&layout.instructions[1]).expect("serialize");
    assert_eq!(json["kind"]["type"], "content-frame");
    assert_eq!(json["kind"]["frame"]["width"], 1080);
}
