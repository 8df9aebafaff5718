/*!
# `INPUT ["<prompt string>",]<variable>`

## Purpose
Suspends execution and awaits a number from the terminal.

## Remarks
Without a prompt string, `? ` is shown. A line that isn't a number
prints `INVALID INPUT` and leaves the variable unchanged.

## Example
```text
10 INPUT "HOW MANY? ", N
20 PRINT N*2
```

*/
