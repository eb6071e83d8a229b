use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_message(kind: MessageKind, text: &str) -> Message {
    Message { id: MessageId(7), kind, text: text.to_owned() }
}

fn make_place(name: &str, kind: &str) -> Place {
    Place {
        name: name.to_owned(),
        address: format!("Rua {name}"),
        kind: kind.to_owned(),
        lat: -2.5,
        lon: -44.3,
    }
}

// =============================================================
// Messages
// =============================================================

#[test]
fn user_message_is_primary_plain_text() {
    let view = render_message(&make_message(MessageKind::User, "<b>oi</b>"));
    assert_eq!(view.id, MessageId(7));
    assert_eq!(view.class, "alert-primary");
    assert_eq!(view.label, "Você");
    assert_eq!(view.body, MessageBody::Text("<b>oi</b>".to_owned()));
}

#[test]
fn pending_message_is_warning() {
    let view = render_message(&make_message(MessageKind::Pending, "Processando sua pergunta..."));
    assert_eq!(view.class, "alert-warning");
    assert_eq!(view.label, "Assistente");
    assert!(view.transient);
}

#[test]
fn only_pending_messages_are_transient() {
    for kind in [MessageKind::User, MessageKind::Assistant, MessageKind::Error] {
        assert!(!render_message(&make_message(kind, "x")).transient, "{kind:?}");
    }
}

#[test]
fn error_message_is_plain_assistant_text() {
    let view = render_message(&make_message(MessageKind::Error, "Desculpe"));
    assert_eq!(view.class, "alert-secondary");
    assert_eq!(view.label, "Assistente");
    assert_eq!(view.body, MessageBody::Text("Desculpe".to_owned()));
}

#[test]
fn assistant_message_renders_markdown() {
    let view = render_message(&make_message(MessageKind::Assistant, "### Itinerário\n\n1. **Praia Grande**"));
    let MessageBody::Html(html) = view.body else {
        panic!("expected html body");
    };
    assert!(html.contains("<h3>Itinerário</h3>"));
    assert!(html.contains("<ol>"));
    assert!(html.contains("<strong>Praia Grande</strong>"));
}

#[test]
fn markdown_strips_raw_html() {
    let html = render_markdown_html("antes <script>alert(1)</script> depois");
    assert!(!html.contains("<script>"));
    assert!(html.contains("antes"));
    assert!(html.contains("depois"));
}

#[test]
fn markdown_escapes_text_angle_brackets() {
    let html = render_markdown_html("a < b");
    assert!(html.contains("a &lt; b"));
}

// =============================================================
// Places
// =============================================================

#[test]
fn places_absent_renders_notice() {
    assert_eq!(render_places(None), PlacesPanel::Empty { notice: "Nenhum local recomendado" });
}

#[test]
fn places_empty_renders_notice_and_no_cards() {
    let panel = render_places(Some(&[]));
    assert!(matches!(panel, PlacesPanel::Empty { .. }));
    assert!(panel.cards().is_empty());
}

#[test]
fn places_render_one_card_each_in_order() {
    let places = vec![make_place("Cafofinho", "restaurant"), make_place("Catedral", "place_of_worship")];
    let panel = render_places(Some(places.as_slice()));
    let cards = panel.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].index, 0);
    assert_eq!(cards[0].name, "Cafofinho");
    assert_eq!(cards[0].address, "Rua Cafofinho");
    assert_eq!(cards[0].type_line, "Tipo: restaurant");
    assert_eq!(cards[1].index, 1);
    assert_eq!(cards[1].position, LatLng::new(-2.5, -44.3));
}

// =============================================================
// Images
// =============================================================

#[test]
fn images_absent_renders_notice() {
    assert_eq!(render_images(None), ImagesPanel::Empty { notice: "Nenhuma imagem disponível" });
}

#[test]
fn images_render_one_tile_per_url() {
    let urls = vec!["https://a/1.jpg".to_owned(), "https://a/2.jpg".to_owned()];
    let panel = render_images(Some(urls.as_slice()));
    let tiles = panel.tiles();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[1].src, "https://a/2.jpg");
    assert_eq!(tiles[0].class, "img-fluid mb-2");
    assert_eq!(tiles[0].max_height_px, 150);
}

// =============================================================
// Popups
// =============================================================

#[test]
fn place_popup_has_name_and_address() {
    let popup = place_popup(&make_place("Cafofinho", "restaurant"));
    assert_eq!(popup.title, "Cafofinho");
    assert_eq!(popup.detail.as_deref(), Some("Rua Cafofinho"));
}

#[test]
fn place_popup_omits_blank_address() {
    let mut place = make_place("X", "y");
    place.address.clear();
    assert!(place_popup(&place).detail.is_none());
}

#[test]
fn location_popup_uses_optional_address() {
    let location = MainLocation { name: "Centro".to_owned(), lat: 0.0, lon: 0.0, address: None, kind: None };
    let popup = location_popup(&location);
    assert_eq!(popup.title, "Centro");
    assert!(popup.detail.is_none());
}

#[test]
fn route_popup_formats_kilometers() {
    let itinerary = Itinerary { points: Vec::new(), total_distance: Some(1234.5) };
    let popup = route_popup(&itinerary).unwrap();
    assert_eq!(popup.detail.as_deref(), Some("Distância total estimada: 1.23 km"));
}

#[test]
fn route_popup_absent_without_distance() {
    assert!(route_popup(&Itinerary::default()).is_none());
}
