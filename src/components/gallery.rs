use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::Reveal;
use crate::gallery::content::{Category, GalleryItem};
use crate::gallery::environment::ImageCapability;
use crate::gallery::image_url::{
    ImageFormat, ImageUrlBuilder, DEFAULT_QUALITY, FALLBACK_WIDTH, THUMBNAIL_WIDTHS,
};
use crate::gallery::prefetch::{BrowserPrefetcher, PrefetchCache};
use crate::gallery::view_state::GalleryViewState;
use crate::gallery::visibility::{loads_eagerly, use_viewport_once, PRELOAD_MARGIN_PX};

// Mirrors the grid breakpoints below: 4, 3, 2 then 1 column.
const THUMBNAIL_SIZES: &str =
    "(min-width: 1280px) 25vw, (min-width: 1024px) 33vw, (min-width: 768px) 50vw, 100vw";

const INSTAGRAM_PROFILE: &str = "https://www.instagram.com/phpbartenders/";

#[derive(Properties, PartialEq)]
struct ThumbnailProps {
    item: &'static GalleryItem,
    index: usize,
    builder: ImageUrlBuilder,
    on_open: Callback<u32>,
    on_hover: Callback<&'static str>,
}

#[function_component(Thumbnail)]
fn thumbnail(props: &ThumbnailProps) -> Html {
    let ThumbnailProps { item, index, builder, on_open, on_hover } = props;
    let item = *item;
    let builder = *builder;
    let eager = loads_eagerly(*index);

    let node = use_node_ref();
    let requested = use_viewport_once(node.clone(), PRELOAD_MARGIN_PX, eager);

    let onclick = {
        let on_open = on_open.clone();
        let id = item.id;
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    };
    let onmouseenter = {
        let on_hover = on_hover.clone();
        let path = item.image;
        Callback::from(move |_: MouseEvent| on_hover.emit(path))
    };

    let (width, height) = item.aspect();
    let image = if requested {
        let webp = builder.srcset(item.image, &THUMBNAIL_WIDTHS, ImageFormat::Webp, DEFAULT_QUALITY);
        let jpeg = builder.srcset(item.image, &THUMBNAIL_WIDTHS, ImageFormat::Jpeg, DEFAULT_QUALITY);
        html! {
            <picture>
                { for webp.map(|set| html! {
                    <source type={ImageFormat::Webp.mime()} srcset={set} sizes={THUMBNAIL_SIZES} />
                }) }
                <img
                    class="gallery-img"
                    src={builder.build(item.image, FALLBACK_WIDTH, ImageFormat::Jpeg, DEFAULT_QUALITY)}
                    srcset={jpeg}
                    sizes={THUMBNAIL_SIZES}
                    alt={item.title}
                    width={width.to_string()}
                    height={height.to_string()}
                    loading={if eager { "eager" } else { "lazy" }}
                    fetchpriority={if eager { "high" } else { "auto" }}
                    decoding="async"
                />
            </picture>
        }
    } else {
        let src = if builder.transforms() {
            builder.placeholder(item.image)
        } else {
            item.image.to_string()
        };
        html! {
            <img
                class="gallery-img placeholder"
                src={src}
                alt={item.title}
                width={width.to_string()}
                height={height.to_string()}
                loading="lazy"
                decoding="async"
            />
        }
    };

    html! {
        <div class="gallery-card" ref={node} {onclick} {onmouseenter}>
            <div class="gallery-frame">
                { image }
                <div class="gallery-overlay"></div>
                <div class="gallery-caption">
                    <span class="category-pill">{ item.category.label() }</span>
                    <h3>{ item.title }</h3>
                    <p>{ item.description }</p>
                </div>
                <div class="gallery-zoom" aria-hidden="true">{"⤢"}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LightboxProps {
    item: &'static GalleryItem,
    builder: ImageUrlBuilder,
    on_close: Callback<()>,
}

#[function_component(Lightbox)]
fn lightbox(props: &LightboxProps) -> Html {
    let LightboxProps { item, builder, on_close } = props;

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lightbox" role="dialog" aria-modal="true" onclick={close.clone()}>
            <div class="lightbox-content" onclick={keep_open}>
                <button class="lightbox-close" aria-label="Fechar" onclick={close}>{"✕"}</button>
                <img
                    class="lightbox-img"
                    src={builder.full(item.image)}
                    alt={item.title}
                    loading="eager"
                    decoding="async"
                />
                <div class="lightbox-caption">
                    <span class="category-pill">{ item.category.label() }</span>
                    <h3>{ item.title }</h3>
                    <p>{ item.description }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let capability = use_context::<ImageCapability>().unwrap_or(ImageCapability::new(false));
    let builder = ImageUrlBuilder::new(capability);
    let view = use_state(GalleryViewState::default);
    // Lives exactly as long as this gallery is mounted.
    let prefetch = use_mut_ref(move || PrefetchCache::new(builder, BrowserPrefetcher));

    let on_category = {
        let view = view.clone();
        Callback::from(move |category: Category| {
            let mut next = (*view).clone();
            next.set_category(category);
            view.set(next);
        })
    };

    let on_open = {
        let view = view.clone();
        Callback::from(move |id: u32| {
            debug!("Opening gallery item {}", id);
            let mut next = (*view).clone();
            next.open_item(id);
            view.set(next);
        })
    };

    let on_close = {
        let view = view.clone();
        Callback::from(move |_: ()| {
            if view.selected.is_some() {
                let mut next = (*view).clone();
                next.close_item();
                view.set(next);
            }
        })
    };

    let on_hover = {
        let prefetch = prefetch.clone();
        Callback::from(move |path: &'static str| {
            let mut cache = prefetch.borrow_mut();
            if cache.ensure_prefetched(path) {
                debug!("{} gallery sources warmed", cache.warmed());
            }
        })
    };

    {
        let on_close = on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let items = view.visible_items();
    let lightbox = match view.selected_item() {
        Some(item) => html! { <Lightbox {item} {builder} on_close={on_close.clone()} /> },
        None => html! {},
    };

    html! {
        <section id="gallery" class="gallery-section">
            <style>
                {r#"
                    .gallery-section {
                        position: relative;
                        padding: 8rem 0;
                        background: linear-gradient(135deg, #000 0%, rgba(88, 28, 135, 0.1) 50%, #000 100%);
                    }
                    .gallery-filters {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 4rem;
                    }
                    .filter-button {
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(251, 191, 36, 0.3);
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .filter-button:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .filter-button.active {
                        background: linear-gradient(90deg, #fbbf24, #f97316);
                        color: #000;
                        border-color: transparent;
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) { .gallery-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (min-width: 1024px) { .gallery-grid { grid-template-columns: repeat(3, 1fr); } }
                    @media (min-width: 1280px) { .gallery-grid { grid-template-columns: repeat(4, 1fr); } }
                    .gallery-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        cursor: pointer;
                        content-visibility: auto;
                        contain-intrinsic-size: 300px 225px;
                        transition: transform 0.25s ease-out;
                    }
                    .gallery-card:hover {
                        transform: translateY(-4px) scale(1.01);
                    }
                    .gallery-frame {
                        position: relative;
                        aspect-ratio: 4 / 3;
                    }
                    .gallery-frame picture {
                        display: contents;
                    }
                    .gallery-img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.3s;
                    }
                    .gallery-img.placeholder {
                        filter: blur(12px);
                    }
                    .gallery-card:hover .gallery-img {
                        transform: scale(1.03);
                    }
                    .gallery-overlay,
                    .gallery-caption,
                    .gallery-zoom {
                        opacity: 0;
                        transition: opacity 0.2s, transform 0.2s;
                    }
                    .gallery-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.2), transparent);
                    }
                    .gallery-caption {
                        position: absolute;
                        inset: 0;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        transform: translateY(0.5rem);
                    }
                    .gallery-caption h3 { color: #fff; font-size: 1.125rem; margin: 0 0 0.5rem; }
                    .gallery-caption p { color: #d1d5db; font-size: 0.875rem; margin: 0; }
                    .gallery-zoom {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        color: #fff;
                    }
                    .gallery-card:hover .gallery-overlay,
                    .gallery-card:hover .gallery-caption,
                    .gallery-card:hover .gallery-zoom {
                        opacity: 1;
                        transform: none;
                    }
                    .category-pill {
                        display: inline-block;
                        align-self: flex-start;
                        padding: 0.25rem 0.75rem;
                        margin-bottom: 0.5rem;
                        border-radius: 9999px;
                        background: #fbbf24;
                        color: #000;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(4px);
                        animation: fadeIn 0.25s ease-out;
                    }
                    .lightbox-content {
                        position: relative;
                        max-width: 90vw;
                        max-height: 90vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .lightbox-img {
                        width: 85vw;
                        max-width: 56rem;
                        height: 70vh;
                        object-fit: cover;
                        border-radius: 0.75rem;
                    }
                    .lightbox-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.5rem;
                        padding: 0.5rem 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .lightbox-caption {
                        width: 100%;
                        margin-top: 0.75rem;
                        text-align: left;
                    }
                    .lightbox-caption h3 { color: #fff; font-size: 1.5rem; margin: 0 0 0.25rem; }
                    .lightbox-caption p { color: #d1d5db; margin: 0; }
                    .gallery-cta {
                        text-align: center;
                        margin-top: 4rem;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            <div class="container">
                <Reveal class="section-heading">
                    <h2>
                        <span class="text-white">{"Nossa"}</span><br />
                        <span class="text-gradient">{"Galeria"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Explore nosso portfólio de criações e eventos que marcaram história"}
                    </p>
                    <div class="gallery-filters">
                        {
                            Category::ALL.iter().map(|category| {
                                let category = *category;
                                let onclick = {
                                    let on_category = on_category.clone();
                                    Callback::from(move |_: MouseEvent| on_category.emit(category))
                                };
                                html! {
                                    <button
                                        key={category.label()}
                                        class={classes!("filter-button", (view.active == category).then(|| "active"))}
                                        {onclick}
                                    >
                                        { category.label() }
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>

                <div class="gallery-grid" aria-hidden={view.lightbox_open().to_string()}>
                    {
                        items.iter().enumerate().map(|(index, item)| {
                            html! {
                                <Thumbnail
                                    key={item.id}
                                    item={*item}
                                    {index}
                                    {builder}
                                    on_open={on_open.clone()}
                                    on_hover={on_hover.clone()}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>

                { lightbox }

                <Reveal class="gallery-cta">
                    <a href={INSTAGRAM_PROFILE} target="_blank" rel="noopener noreferrer" class="cta-primary">
                        {"Ver Mais Trabalhos ↗"}
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
