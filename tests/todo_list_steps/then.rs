//! Then steps for todo list BDD scenarios.

use super::world::ListWorld;
use rstest_bdd_macros::then;
use todolist::todos::domain::TodoListError;

#[then("the list contains {count:usize} items")]
fn list_contains_count(world: &ListWorld, count: usize) -> Result<(), eyre::Report> {
    if world.list.len() != count {
        return Err(eyre::eyre!(
            "expected {count} items, found {}",
            world.list.len()
        ));
    }
    Ok(())
}

#[then("the list is fully done")]
fn list_is_fully_done(world: &ListWorld) -> Result<(), eyre::Report> {
    if !world.list.is_done() {
        return Err(eyre::eyre!("expected every todo to be done"));
    }
    Ok(())
}

#[then("the list is not fully done")]
fn list_is_not_fully_done(world: &ListWorld) -> Result<(), eyre::Report> {
    if world.list.is_done() {
        return Err(eyre::eyre!("expected at least one pending todo"));
    }
    Ok(())
}

#[then(r#"the rendered list headline is "{headline}""#)]
fn rendered_headline_is(world: &ListWorld, headline: String) -> Result<(), eyre::Report> {
    let rendered = world.list.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    if first_line != headline {
        return Err(eyre::eyre!(
            "expected headline '{headline}', got '{first_line}'"
        ));
    }
    Ok(())
}

#[then(r#"the rendered entry for "{title}" is "{line}""#)]
fn rendered_entry_is(world: &ListWorld, title: String, line: String) -> Result<(), eyre::Report> {
    let item = world
        .list
        .find_by_title(&title)
        .ok_or_else(|| eyre::eyre!("no todo titled '{title}' in the list"))?;
    let rendered = item.borrow().render();
    if rendered != line {
        return Err(eyre::eyre!("expected '{line}', got '{rendered}'"));
    }
    Ok(())
}

#[then("the offer is rejected as an invalid argument")]
fn offer_rejected_as_invalid(world: &ListWorld) -> Result<(), eyre::Report> {
    match &world.last_add_result {
        Some(Err(TodoListError::InvalidArgument)) => Ok(()),
        other => Err(eyre::eyre!(
            "expected an invalid argument rejection, got {other:?}"
        )),
    }
}

#[then(r#"the view holds a single todo titled "{title}""#)]
fn view_holds_a_single_todo(world: &ListWorld, title: String) -> Result<(), eyre::Report> {
    let view = world
        .completed_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no completed view in scenario world"))?;
    if view.len() != 1 {
        return Err(eyre::eyre!(
            "expected a single todo in the view, found {}",
            view.len()
        ));
    }
    let item = view
        .item_at(0)
        .map_err(|err| eyre::eyre!("view item lookup failed: {err}"))?;
    let item_title = item.borrow().title().to_owned();
    if item_title != title {
        return Err(eyre::eyre!("expected '{title}', got '{item_title}'"));
    }
    Ok(())
}

#[then("the list has no completed todos")]
fn list_has_no_completed_todos(world: &ListWorld) -> Result<(), eyre::Report> {
    let completed = world.list.all_done();
    if !completed.is_empty() {
        return Err(eyre::eyre!(
            "expected no completed todos, found {}",
            completed.len()
        ));
    }
    Ok(())
}
