use yew::prelude::*;

use crate::content::{PhotoDescriptor, PhotoGallery};

fn photo_link(photo: &PhotoDescriptor) -> Html {
    html! {
        <a key={photo.path.clone()} class="photo" href={photo.path.clone()} target="_blank" rel="noreferrer">
            <img src={photo.path.clone()} alt={photo.alt.clone()} loading="lazy" />
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct PressPhotosProps {
    pub gallery: PhotoGallery,
}

/// Renders the same photos twice: a swipeable strip for narrow screens and a
/// grid for wide ones. The stylesheet hides whichever one doesn't apply.
#[function_component(PressPhotos)]
pub fn press_photos(props: &PressPhotosProps) -> Html {
    let body = if props.gallery.is_empty() {
        html! {
            <div class="card photo-placeholder">
                <p>{"Press photos are on their way."}</p>
                <p class="muted">{"Email for high-resolution shots in the meantime."}</p>
            </div>
        }
    } else {
        html! {
            <div class="photo-wrap">
                { for props.gallery.arrangements().map(|(layout, photos)| html! {
                    <div class={layout.class()}>
                        { for photos.iter().map(photo_link) }
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <section class="section" id="photos">
            <div class="section-header">
                <h2 class="h2">{"Press photos"}</h2>
                if !props.gallery.is_empty() {
                    <p class="muted">{"Swipe on mobile · grid on desktop."}</p>
                }
            </div>
            { body }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    async fn render(filenames: &[&str]) -> String {
        let filenames: Vec<String> = filenames.iter().map(|name| name.to_string()).collect();
        let gallery = PhotoGallery::new("/photos", &filenames, "Press photo");
        LocalServerRenderer::<PressPhotos>::with_props(PressPhotosProps { gallery })
            .render()
            .await
    }

    /// `href`s of the photo links, in document order.
    fn hrefs(markup: &str) -> Vec<&str> {
        markup
            .split("<a ")
            .skip(1)
            .filter_map(|rest| rest.split('>').next())
            .filter(|tag| tag.contains(r#"class="photo""#))
            .filter_map(|tag| tag.split(r#"href=""#).nth(1))
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[tokio::test]
    async fn scroller_and_grid_render_every_photo_in_order() {
        let local = tokio::task::LocalSet::new();
        let markup = local
            .run_until(render(&["headshot-1.jpg", "close-up-on-stage.png", "wide-headshot.jpg"]))
            .await;

        let scroller_at = markup.find(r#"class="photo-scroller""#).expect("scroller rendered");
        let grid_at = markup.find(r#"class="photo-grid""#).expect("grid rendered");
        assert!(scroller_at < grid_at);

        let expected = ["/photos/headshot-1.jpg", "/photos/close-up-on-stage.png", "/photos/wide-headshot.jpg"];
        assert_eq!(hrefs(&markup[scroller_at..grid_at]), expected);
        assert_eq!(hrefs(&markup[grid_at..]), expected);
        assert!(!markup.contains("photo-placeholder"));
    }

    #[tokio::test]
    async fn empty_gallery_renders_placeholder() {
        let local = tokio::task::LocalSet::new();
        let markup = local.run_until(render(&[])).await;

        assert!(markup.contains("photo-placeholder"));
        assert!(!markup.contains("photo-scroller"));
        assert!(!markup.contains("photo-grid"));
        assert!(hrefs(&markup).is_empty());
    }
}
