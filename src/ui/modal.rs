use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element};

/// Overlay `content` centered on top of `base`, dimming everything
/// behind it. Clicking the backdrop emits `on_blur`, which the caller
/// maps to the modal's cancel message.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
