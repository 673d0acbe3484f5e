// ============================================================================
// PET DETAILS VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, button, link, on_click, ElementBuilder};
use crate::models::Pet;
use crate::services::ApiClient;
use crate::state::{FetchState, Route};
use crate::views::pet_list::render_status_badge;
use crate::views::shared::render_loader;
use crate::viewmodels::PetDetailsViewModel;

type DetailsViewModel = PetDetailsViewModel<ApiClient>;

pub fn render_pet_details(vm: &DetailsViewModel) -> Result<Element, JsValue> {
    let content = match vm.state() {
        FetchState::Idle | FetchState::Loading => return render_loader("Loading pet..."),
        FetchState::Error(message) => render_error(vm, &message)?,
        FetchState::Success(pet) => render_card(&pet)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("pet-details-page")
        .child(content)?
        .build())
}

/// Error box with Retry + Back, shared with the edit page
pub fn render_load_error<F>(message: &str, on_retry: F) -> Result<Element, JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let retry = button("btn-primary", "Retry")?;
    on_click(&retry, on_retry)?;

    let actions = ElementBuilder::new("div")?
        .class("error-actions")
        .child(retry)?
        .child(link(&Route::PetList.to_hash(), "btn", "Back to List")?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("error-container")
        .child(ElementBuilder::new("div")?.class("error-message").text(message).build())?
        .child(actions)?
        .build())
}

fn render_error(vm: &DetailsViewModel, message: &str) -> Result<Element, JsValue> {
    let vm = vm.clone();
    render_load_error(message, move |_| {
        let vm = vm.clone();
        spawn_local(async move { vm.load().await });
    })
}

fn render_card(pet: &Pet) -> Result<Element, JsValue> {
    let edit_href = Route::PetEdit(pet.id).to_hash();

    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(ElementBuilder::new("h1")?.text("Pet Details").build())?
        .child(
            ElementBuilder::new("div")?
                .class("header-actions")
                .child(link(&edit_href, "btn btn-primary", "Edit Pet")?)?
                .build(),
        )?
        .build();

    let basic = info_section(
        "Basic Information",
        vec![
            info_item("ID:", text_value(&pet.id.to_string())?)?,
            info_item("Name:", text_value(pet.display_name())?)?,
            info_item("Status:", render_status_badge(pet.status)?)?,
        ],
    )?;

    let tags = pet.tag_list().unwrap_or_else(|| "No tags".to_string());
    let additional = info_section(
        "Additional Details",
        vec![
            info_item("Category:", text_value(pet.category_name().unwrap_or("N/A"))?)?,
            info_item("Tags:", text_value(&tags)?)?,
        ],
    )?;

    let info = ElementBuilder::new("div")?
        .class("pet-info")
        .child(basic)?
        .child(additional)?
        .build();

    let card = ElementBuilder::new("div")?
        .class("pet-details-card")
        .child(header)?
        .child(info)?
        .build();

    if !pet.photos().is_empty() {
        append_child(&card, &render_photos(pet.photos())?)?;
    }

    let actions = ElementBuilder::new("div")?
        .class("page-actions")
        .child(link(&edit_href, "btn btn-primary", "Edit Pet")?)?
        .child(link(&Route::PetList.to_hash(), "btn", "Back to List")?)?
        .build();
    append_child(&card, &actions)?;

    Ok(card)
}

fn info_section(title: &str, items: Vec<Element>) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("info-section")
        .child(ElementBuilder::new("div")?.class("section-title").text(title).build())?
        .children(items)
        .map(ElementBuilder::build)
}

fn info_item(label: &str, value: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("info-item")
        .child(ElementBuilder::new("span")?.class("label").text(label).build())?
        .child(value)?
        .build())
}

fn text_value(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("span")?.class("value").text(text).build())
}

fn render_photos(urls: &[String]) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("photo-grid").build();
    for (i, url) in urls.iter().enumerate() {
        let image = ElementBuilder::new("img")?
            .attr("src", url)?
            .attr("alt", &format!("Pet photo {}", i + 1))?
            .attr("loading", "lazy")?
            .build();
        let item = ElementBuilder::new("div")?.class("photo-item").child(image)?.build();
        append_child(&grid, &item)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("pet-photos")
        .child(ElementBuilder::new("div")?.class("photos-title").text("Photos").build())?
        .child(grid)?
        .build())
}
