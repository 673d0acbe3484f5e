// ============================================================================
// PET LIST VIEW
// ============================================================================
// The toolbar is drawn once per full render. Search and paging only redraw
// #pet-table-container so the search box keeps focus while typing.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, button, clear_children, get_element_by_id, input_value, link, on_change, on_click, on_input,
    select_value, ElementBuilder,
};
use crate::models::{Pet, PetStatus};
use crate::services::ApiClient;
use crate::state::{FetchState, Route};
use crate::views::shared::render_loader;
use crate::viewmodels::{PetListViewModel, PetPage};

const TABLE_CONTAINER_ID: &str = "pet-table-container";

type ListViewModel = PetListViewModel<ApiClient>;

pub fn render_pet_list(vm: &ListViewModel) -> Result<Element, JsValue> {
    let loading = vm.state().is_loading();

    let refresh = ElementBuilder::new("button")?
        .class("refresh-btn")
        .attr("type", "button")?
        .flag("disabled", loading)?
        .text("Refresh")
        .build();
    {
        let vm = vm.clone();
        on_click(&refresh, move |_| spawn_load(&vm))?;
    }

    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(ElementBuilder::new("h1")?.text("Pet Store").build())?
        .child(ElementBuilder::new("div")?.class("header-actions").child(refresh)?.build())?
        .build();

    let filters = ElementBuilder::new("div")?
        .class("filters-section")
        .child(render_status_filter(vm)?)?
        .child(render_search(vm)?)?
        .build();

    let container = ElementBuilder::new("div")?.id(TABLE_CONTAINER_ID)?.build();
    append_child(&container, &render_table_content(vm)?)?;

    let card = ElementBuilder::new("div")?
        .class("pet-list-card")
        .child(header)?
        .child(filters)?
        .child(container)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("pet-list-page")
        .child(card)?
        .build())
}

/// Redraw only the table area. A no-op when the list page is not on screen.
pub fn update_pet_table(vm: &ListViewModel) -> Result<(), JsValue> {
    let Some(container) = get_element_by_id(TABLE_CONTAINER_ID) else {
        return Ok(());
    };
    clear_children(&container);
    append_child(&container, &render_table_content(vm)?)
}

fn spawn_load(vm: &ListViewModel) {
    let vm = vm.clone();
    spawn_local(async move { vm.load().await });
}

fn render_status_filter(vm: &ListViewModel) -> Result<Element, JsValue> {
    let current = vm.status();
    let select = ElementBuilder::new("select")?.class("status-select").build();
    for status in PetStatus::ALL {
        let option = ElementBuilder::new("option")?
            .attr("value", status.as_str())?
            .flag("selected", status == current)?
            .text(status.label())
            .build();
        append_child(&select, &option)?;
    }

    {
        let vm = vm.clone();
        on_change(&select, move |e| {
            let value = select_value(e.target());
            match value.parse::<PetStatus>() {
                Ok(status) => {
                    let vm = vm.clone();
                    spawn_local(async move { vm.change_status(status).await });
                }
                Err(e) => log::warn!("⚠️ [PETS] {}", e),
            }
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("filter-group")
        .child(ElementBuilder::new("label")?.class("filter-label").text("Status:").build())?
        .child(select)?
        .build())
}

fn render_search(vm: &ListViewModel) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("search-input")
        .attr("type", "search")?
        .attr("placeholder", "Search by pet name")?
        .attr("value", &vm.query())?
        .build();

    {
        let vm = vm.clone();
        on_input(&input, move |e| {
            vm.set_query(&input_value(e.target()));
            if let Err(err) = update_pet_table(&vm) {
                log::error!("❌ [PETS] table redraw failed: {:?}", err);
            }
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("filter-group")
        .child(ElementBuilder::new("label")?.class("filter-label").text("Search:").build())?
        .child(input)?
        .build())
}

fn render_table_content(vm: &ListViewModel) -> Result<Element, JsValue> {
    match vm.state() {
        FetchState::Idle | FetchState::Loading => render_loader("Loading pets..."),
        FetchState::Error(message) => render_error(vm, &message),
        FetchState::Success(_) => match vm.visible() {
            Some(page) => render_page(vm, &page),
            None => render_loader("Loading pets..."),
        },
    }
}

fn render_error(vm: &ListViewModel, message: &str) -> Result<Element, JsValue> {
    let retry = button("btn-primary", "Try Again")?;
    {
        let vm = vm.clone();
        on_click(&retry, move |_| spawn_load(&vm))?;
    }

    Ok(ElementBuilder::new("div")?
        .class("error-message")
        .child(ElementBuilder::new("p")?.text(message).build())?
        .child(retry)?
        .build())
}

fn render_page(vm: &ListViewModel, page: &PetPage) -> Result<Element, JsValue> {
    if page.total == 0 {
        return Ok(ElementBuilder::new("div")?
            .class("empty-state")
            .text("No pets found")
            .build());
    }

    let head_row = ElementBuilder::new("tr")?.build();
    for title in ["ID", "Name", "Status", "Category", "Actions"] {
        append_child(&head_row, &ElementBuilder::new("th")?.text(title).build())?;
    }

    let body = ElementBuilder::new("tbody")?.build();
    for pet in &page.pets {
        append_child(&body, &render_row(pet)?)?;
    }

    let table = ElementBuilder::new("table")?
        .class("pet-table")
        .child(ElementBuilder::new("thead")?.child(head_row)?.build())?
        .child(body)?
        .build();

    Ok(ElementBuilder::new("div")?
        .child(table)?
        .child(render_pagination(vm, page)?)?
        .build())
}

fn render_row(pet: &Pet) -> Result<Element, JsValue> {
    let cell = |text: &str| -> Result<Element, JsValue> { Ok(ElementBuilder::new("td")?.text(text).build()) };

    let name = ElementBuilder::new("td")?
        .child(ElementBuilder::new("span")?.class("pet-name").text(pet.display_name()).build())?
        .build();

    let actions = ElementBuilder::new("td")?
        .child(link(&Route::PetDetails(pet.id).to_hash(), "view-link", "View Details")?)?
        .build();

    Ok(ElementBuilder::new("tr")?
        .child(cell(&pet.id.to_string())?)?
        .child(name)?
        .child(ElementBuilder::new("td")?.child(render_status_badge(pet.status)?)?.build())?
        .child(cell(pet.category_name().unwrap_or("N/A"))?)?
        .child(actions)?
        .build())
}

pub fn render_status_badge(status: PetStatus) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("span")?
        .class(&format!("pet-status badge badge-{}", status.badge_class()))
        .text(status.as_str())
        .build())
}

fn render_pagination(vm: &ListViewModel, page: &PetPage) -> Result<Element, JsValue> {
    let previous = ElementBuilder::new("button")?
        .class("page-btn")
        .attr("type", "button")?
        .flag("disabled", !page.has_previous())?
        .text("‹ Prev")
        .build();
    if page.has_previous() {
        let vm = vm.clone();
        let target = page.page - 1;
        on_click(&previous, move |_| go_to_page(&vm, target))?;
    }

    let next = ElementBuilder::new("button")?
        .class("page-btn")
        .attr("type", "button")?
        .flag("disabled", !page.has_next())?
        .text("Next ›")
        .build();
    if page.has_next() {
        let vm = vm.clone();
        let target = page.page + 1;
        on_click(&next, move |_| go_to_page(&vm, target))?;
    }

    let position = format!("Page {} of {}", page.page + 1, page.page_count);

    Ok(ElementBuilder::new("div")?
        .class("pagination")
        .child(ElementBuilder::new("span")?.class("pagination-total").text(&page.summary()).build())?
        .child(previous)?
        .child(ElementBuilder::new("span")?.class("pagination-position").text(&position).build())?
        .child(next)?
        .build())
}

fn go_to_page(vm: &ListViewModel, page: usize) {
    vm.set_page(page);
    if let Err(e) = update_pet_table(vm) {
        log::error!("❌ [PETS] table redraw failed: {:?}", e);
    }
}
