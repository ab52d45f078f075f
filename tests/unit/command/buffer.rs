use super::*;
use crate::pipeline::vertex_array::IndexType;

#[test]
fn clear_defaults_touch_both_planes() {
    let c = ClearCommand::default();
    assert!(c.clear_color && c.clear_depth);
    assert_eq!(c.depth, DEFAULT_CLEAR_DEPTH);
    assert!(!ClearCommand::color_only(Vec4::ONE).clear_depth);
    assert!(!ClearCommand::depth_only(0.5).clear_color);
}

#[test]
fn push_respects_capacity() {
    let mut cb = CommandBuffer::with_capacity(2);
    cb.push_clear(ClearCommand::default()).unwrap();
    cb.push_draw(DrawCommand::new(0, 3)).unwrap();
    let err = cb.push_draw(DrawCommand::new(0, 3)).unwrap_err();
    assert!(err.to_string().starts_with("capacity error:"));
    assert_eq!(cb.len(), 2);
    assert_eq!(cb.draw_count(), 1);

    cb.clear();
    assert!(cb.is_empty());
    assert_eq!(cb.capacity(), 2);
}

#[test]
fn commands_keep_insertion_order() {
    let mut cb = CommandBuffer::new();
    cb.push_draw(DrawCommand::new(1, 3)).unwrap();
    cb.push_clear(ClearCommand::default()).unwrap();
    cb.push_draw(DrawCommand::new(2, 6).with_backface_culling(true))
        .unwrap();
    let is_draw: Vec<bool> = cb.iter().map(|c| matches!(c, Command::Draw(_))).collect();
    assert_eq!(is_draw, [true, false, true]);

    let expected = DrawCommand {
        program_id: 2,
        nof_vertices: 6,
        backface_culling: true,
        vao: VertexArray::default(),
    };
    assert_eq!(cb.commands()[2], Command::Draw(expected));
}

#[test]
fn command_json_is_tagged() {
    let json = r#"{"type":"clear","color":[1.0,0.0,0.0,1.0],"clear_depth":false}"#;
    let c: Command = serde_json::from_str(json).unwrap();
    let red = ClearCommand::color_only(Vec4::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(c, Command::Clear(red));

    let d: Command =
        serde_json::from_str(r#"{"type":"draw","program_id":3,"nof_vertices":6}"#).unwrap();
    assert_eq!(d, Command::Draw(DrawCommand::new(3, 6)));
}

#[test]
fn summaries_describe_commands() {
    let clear = Command::Clear(ClearCommand::depth_only(0.5));
    assert_eq!(clear.summary(), "clear depth=0.5");

    let vao = VertexArray::default().with_index(0, 0, IndexType::U8);
    let draw = DrawCommand::new(1, 7)
        .with_backface_culling(true)
        .with_vao(vao);
    let draw = Command::Draw(draw);
    assert_eq!(
        draw.summary(),
        "draw program=1 vertices=7 triangles=2 attributes=0 indexed=U8 cull"
    );
}
