/*!
# `<variable>=<expression>`

## Purpose
Assigns a value to a variable.

## Remarks
Only the first letter of the name selects the variable.

## Example
```text
10 TOTAL=2+3
20 PRINT T
RUN
5
```

*/
